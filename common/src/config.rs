pub const DEFAULT_DEVICE_NAME: &str = "eth0";
pub const DEFAULT_CYCLE_SECS: u64 = 30 * 60;

/// Relative spread applied to the cycle length, `0.25` means roughly ±12.5%.
pub const CYCLE_VARIANCE: f64 = 0.25;

/// Number of failed changes, counted over the whole run, that ends rotation.
pub const MAX_FAILURES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Network device whose hardware address gets rotated.
    pub device_name: String,
    /// Base number of seconds between two rotations.
    ///
    /// A value of `0` is accepted and disables waiting altogether.
    pub cycle_secs: u64,
    /// Only log the commands that would be run.
    pub dry_run: bool,
    /// Suppresses informational output, warnings and errors are still shown.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            cycle_secs: DEFAULT_CYCLE_SECS,
            dry_run: false,
            quiet: false,
        }
    }
}
