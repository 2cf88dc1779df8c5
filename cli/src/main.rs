mod commands;
mod terminal;

use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use commands::CommandLine;
use macrotate_common::config::Config;
use macrotate_core::adapters::outbound::os::platform::Platform;
use macrotate_core::adapters::outbound::os::process_runner::ProcessRunner;
use macrotate_core::adapters::outbound::tokio_sleeper::TokioSleeper;
use macrotate_core::application::services::rotation::RotationService;
use terminal::reporter::{self, TerminalReporter};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cfg: Config = CommandLine::parse_args().into_config();

    logging::init_logging(cfg.quiet);

    let platform = Platform::detect()?;
    let mut service = RotationService::new(
        platform.address_setter(),
        Box::new(ProcessRunner),
        Box::new(TokioSleeper),
        Box::new(TerminalReporter),
        StdRng::from_os_rng(),
    );

    print::header("rotating mac address");
    print::aligned_line("Device", &cfg.device_name, 6);
    print::aligned_line("Cycle", format!("{}s", cfg.cycle_secs), 6);
    if cfg.dry_run {
        print::aligned_line("Mode", "dry run", 6);
    }

    tokio::select! {
        err = service.run(&cfg) => {
            reporter::fatal(&err);
            Ok(ExitCode::FAILURE)
        }
        interrupted = tokio::signal::ctrl_c() => {
            interrupted?;
            info!("interrupt caught; finished cycling MAC addresses");
            Ok(ExitCode::SUCCESS)
        }
    }
}
