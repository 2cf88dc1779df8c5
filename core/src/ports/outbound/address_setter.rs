use crate::domain::models::command::SetCommand;
use crate::domain::models::mac::MacAddress;

/// Builds the OS specific command that assigns `mac` to `device`.
pub trait AddressSetter: Send + Sync {
    fn build_set_command(&self, device: &str, mac: &MacAddress) -> SetCommand;
}
