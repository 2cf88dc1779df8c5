//! # Generated Hardware Addresses
//!
//! A generated address keeps the three prefix octets of a randomly picked
//! [`Vendor`] and appends three fragments of two decimal digits each.
//!
//! Fragment digits are sampled from `0..FRAGMENT_DIGIT_BOUND`, so the digit
//! `9` never appears in a fragment.

use std::fmt;

use rand::Rng;

use crate::domain::models::vendor::{Vendor, VendorPrefix, pick_vendor};

/// Exclusive upper bound of a fragment digit.
pub const FRAGMENT_DIGIT_BOUND: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn from_parts(prefix: VendorPrefix, tail: [u8; 3]) -> Self {
        let [a, b, c] = prefix.octets();
        let [d, e, f] = tail;
        Self([a, b, c, d, e, f])
    }

    pub fn prefix(&self) -> VendorPrefix {
        VendorPrefix([self.0[0], self.0[1], self.0[2]])
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Generates a fresh address under a random vendor prefix.
pub fn new_random_mac<R: Rng + ?Sized>(rng: &mut R) -> (&'static Vendor, MacAddress) {
    let vendor = pick_vendor(rng);
    let tail = [
        random_fragment(rng),
        random_fragment(rng),
        random_fragment(rng),
    ];
    (vendor, MacAddress::from_parts(vendor.prefix, tail))
}

// Packs two decimal digits into one octet so its hex rendering reads "d1d2".
fn random_fragment<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let high = rng.random_range(0..FRAGMENT_DIGIT_BOUND);
    let low = rng.random_range(0..FRAGMENT_DIGIT_BOUND);
    (high << 4) | low
}
