use crate::domain::models::command::SetCommand;
use crate::domain::models::mac::MacAddress;
use crate::ports::outbound::address_setter::AddressSetter;

/// Linux: `ip link set dev <device> addr <mac>`.
pub struct IpLinkSetter;

impl AddressSetter for IpLinkSetter {
    fn build_set_command(&self, device: &str, mac: &MacAddress) -> SetCommand {
        let mac = mac.to_string();
        SetCommand::new("ip", ["link", "set", "dev", device, "addr", mac.as_str()])
    }
}
