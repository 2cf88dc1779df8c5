use macrotate_common::error::RotationError;

use crate::adapters::outbound::os::ifconfig::IfconfigSetter;
use crate::adapters::outbound::os::ip_link::IpLinkSetter;
use crate::ports::outbound::address_setter::AddressSetter;

/// OS family, as far as changing a hardware address is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Uses `ip link`.
    Linux,
    /// Uses `ifconfig ... ether`.
    Bsd,
}

impl Platform {
    pub fn detect() -> Result<Self, RotationError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self, RotationError> {
        match os {
            "linux" | "android" => Ok(Platform::Linux),
            "macos" | "ios" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Ok(Platform::Bsd),
            other => Err(RotationError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn address_setter(self) -> Box<dyn AddressSetter> {
        match self {
            Platform::Linux => Box::new(IpLinkSetter),
            Platform::Bsd => Box::new(IfconfigSetter),
        }
    }
}
