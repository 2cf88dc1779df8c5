use std::time::Duration;

use macrotate_common::error::CommandError;

use crate::domain::models::command::SetCommand;
use crate::domain::models::mac::MacAddress;
use crate::domain::models::vendor::Vendor;

/// Sink for everything the rotation loop wants the user to know.
pub trait RotationReporter: Send + Sync {
    /// A command that was not executed because of dry-run mode.
    fn would_run(&self, command: &SetCommand);

    fn address_changed(&self, vendor: &Vendor, mac: &MacAddress);

    /// `remaining` is the number of further failures tolerated before the run stops.
    fn change_failed(&self, error: &CommandError, remaining: usize);

    fn waiting(&self, wait: Duration);
}
