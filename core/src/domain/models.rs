//! # Domain Models
//!
//! ## Core Entities
//! * [`vendor::Vendor`]: A hardware manufacturer together with its address prefix.
//! * [`mac::MacAddress`]: A generated hardware address.
//!
//! ## Value Objects
//! * [`command::SetCommand`]: An external program invocation that assigns an address.
//! * [`outcome::RotationOutcome`]: The result of one rotation attempt.

pub mod command;
pub mod mac;
pub mod outcome;
pub mod vendor;
