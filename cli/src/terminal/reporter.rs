use std::time::Duration;

use colored::*;
use tracing::{error, info, warn};

use macrotate_common::error::{CommandError, RotationError};
use macrotate_core::domain::models::command::SetCommand;
use macrotate_core::domain::models::mac::MacAddress;
use macrotate_core::domain::models::vendor::Vendor;
use macrotate_core::ports::outbound::rotation_reporter::RotationReporter;

use crate::terminal::colors;

/// Reports rotation progress as tracing events.
///
/// Dry-run commands are the only output of a dry run, so they are logged at
/// `warn` and survive `--quiet`.
pub struct TerminalReporter;

impl RotationReporter for TerminalReporter {
    fn would_run(&self, command: &SetCommand) {
        warn!("would run `{}`", command.to_string().color(colors::ACCENT));
    }

    fn address_changed(&self, vendor: &Vendor, mac: &MacAddress) {
        info!(
            "set to MAC address {} of vendor {}",
            mac.to_string().color(colors::MAC_ADDR).bold(),
            vendor.name.color(colors::VENDOR)
        );
    }

    fn change_failed(&self, error: &CommandError, remaining: usize) {
        warn!("an error occurred: {}", error);
        match remaining {
            0 => warn!("no further failures are tolerated"),
            n => warn!(
                "the program will stop if {} more {}",
                n.to_string().bold(),
                if n == 1 { "occurs" } else { "occur" }
            ),
        }
    }

    fn waiting(&self, wait: Duration) {
        info!(
            "waiting for {} seconds until next rotation",
            wait.as_secs().to_string().color(colors::ACCENT)
        );
    }
}

/// Logs the error that ended the run through the regular formatter.
pub fn fatal(err: &RotationError) {
    for line in err.to_string().lines() {
        error!("{}", line);
    }
}
