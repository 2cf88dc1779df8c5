use macrotate_common::error::CommandError;

use crate::domain::models::mac::MacAddress;
use crate::domain::models::vendor::Vendor;

/// Result of one rotation attempt, consumed right away by the rotation loop.
#[derive(Debug)]
pub enum RotationOutcome {
    Success {
        vendor: &'static Vendor,
        mac: MacAddress,
    },
    Failure {
        error: CommandError,
    },
}
