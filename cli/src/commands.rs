use clap::Parser;
use macrotate_common::config::{Config, DEFAULT_CYCLE_SECS, DEFAULT_DEVICE_NAME};

const DESCRIPTION: &str = "Rotate MAC addresses on a specified interval, with a bit of variation added.
Requires superuser privileges. Supports macOS and Linux.";

#[derive(Parser, Debug)]
#[command(name = "macrotate")]
#[command(version, about = "Periodically randomizes a network device's MAC address.")]
#[command(after_help = DESCRIPTION)]
pub struct CommandLine {
    /// The network device name
    #[arg(long, default_value = DEFAULT_DEVICE_NAME)]
    pub device_name: String,

    /// The seconds between each rotation (with variance)
    #[arg(long, default_value_t = DEFAULT_CYCLE_SECS)]
    pub cycle_secs: u64,

    /// Display the commands to be run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            device_name: self.device_name,
            cycle_secs: self.cycle_secs,
            dry_run: self.dry_run,
            quiet: self.quiet,
        }
    }
}
