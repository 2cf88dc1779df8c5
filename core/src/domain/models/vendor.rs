use std::fmt;

use rand::Rng;

/// The first three octets of an address, registered to a manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VendorPrefix(pub [u8; 3]);

impl VendorPrefix {
    pub const fn octets(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vendor {
    pub name: &'static str,
    pub prefix: VendorPrefix,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const VENDORS: [Vendor; 5] = [
    Vendor { name: "Intel", prefix: VendorPrefix([0x00, 0x1b, 0x77]) },
    Vendor { name: "HP", prefix: VendorPrefix([0x00, 0x1b, 0x78]) },
    Vendor { name: "Foxconn", prefix: VendorPrefix([0x00, 0x01, 0x6c]) },
    Vendor { name: "Cisco", prefix: VendorPrefix([0x00, 0x10, 0x29]) },
    Vendor { name: "AMD", prefix: VendorPrefix([0x00, 0x0c, 0x87]) },
];

/// Picks one entry of [`VENDORS`] uniformly at random.
pub fn pick_vendor<R: Rng + ?Sized>(rng: &mut R) -> &'static Vendor {
    &VENDORS[rng.random_range(0..VENDORS.len())]
}
