use crate::domain::models::command::SetCommand;
use crate::domain::models::mac::MacAddress;
use crate::ports::outbound::address_setter::AddressSetter;

/// macOS and the BSDs: `ifconfig <device> ether <mac>`.
pub struct IfconfigSetter;

impl AddressSetter for IfconfigSetter {
    fn build_set_command(&self, device: &str, mac: &MacAddress) -> SetCommand {
        let mac = mac.to_string();
        SetCommand::new("ifconfig", [device, "ether", mac.as_str()])
    }
}
