use rand::Rng;
use tracing::debug;

use macrotate_common::config::{CYCLE_VARIANCE, Config, MAX_FAILURES};
use macrotate_common::error::RotationError;

use crate::domain::jitter::jittered_wait;
use crate::domain::ledger::FailureLedger;
use crate::domain::models::command::SetCommand;
use crate::domain::models::mac::{MacAddress, new_random_mac};
use crate::domain::models::outcome::RotationOutcome;
use crate::domain::models::vendor::Vendor;
use crate::ports::outbound::address_setter::AddressSetter;
use crate::ports::outbound::command_runner::CommandRunner;
use crate::ports::outbound::rotation_reporter::RotationReporter;
use crate::ports::outbound::sleeper::Sleeper;

#[derive(Debug)]
pub enum RotationState {
    Running,
    Terminated(RotationError),
}

/// Rotates the hardware address of one device until too many changes failed.
///
/// Every collaborator is injected, including the random source, so a run is
/// fully reproducible with scripted adapters and a seeded generator.
pub struct RotationService<R> {
    setter: Box<dyn AddressSetter>,
    runner: Box<dyn CommandRunner>,
    sleeper: Box<dyn Sleeper>,
    reporter: Box<dyn RotationReporter>,
    rng: R,
    ledger: FailureLedger,
}

impl<R: Rng + Send> RotationService<R> {
    pub fn new(
        setter: Box<dyn AddressSetter>,
        runner: Box<dyn CommandRunner>,
        sleeper: Box<dyn Sleeper>,
        reporter: Box<dyn RotationReporter>,
        rng: R,
    ) -> Self {
        Self {
            setter,
            runner,
            sleeper,
            reporter,
            rng,
            ledger: FailureLedger::new(MAX_FAILURES),
        }
    }

    /// Runs rotation cycles until the failure threshold is reached.
    ///
    /// Successful changes never end the loop, so the only way this returns is
    /// with [`RotationError::TooManyFailures`].
    pub async fn run(&mut self, cfg: &Config) -> RotationError {
        loop {
            if let RotationState::Terminated(err) = self.step(cfg).await {
                return err;
            }
        }
    }

    /// One rotation cycle: generate, apply, account, and wait unless terminated.
    ///
    /// Once the threshold is reached every further call returns
    /// [`RotationState::Terminated`] without attempting another change.
    pub async fn step(&mut self, cfg: &Config) -> RotationState {
        if self.ledger.is_exhausted() {
            return RotationState::Terminated(self.ledger.to_error());
        }

        match self.rotate_once(cfg).await {
            RotationOutcome::Success { vendor, mac } => {
                self.reporter.address_changed(vendor, &mac);
            }
            RotationOutcome::Failure { error } => {
                let (error, remaining) = self.ledger.record(error);
                self.reporter.change_failed(error, remaining);
            }
        }

        if self.ledger.is_exhausted() {
            return RotationState::Terminated(self.ledger.to_error());
        }

        let wait = jittered_wait(&mut self.rng, cfg.cycle_secs, CYCLE_VARIANCE);
        self.reporter.waiting(wait);
        self.sleeper.sleep(wait).await;
        RotationState::Running
    }

    /// Generates a candidate address and applies it to `cfg.device_name`.
    pub async fn rotate_once(&mut self, cfg: &Config) -> RotationOutcome {
        let (vendor, mac) = new_random_mac(&mut self.rng);
        let command = self.setter.build_set_command(&cfg.device_name, &mac);
        self.apply_set(vendor, mac, &command, cfg.dry_run).await
    }

    /// Executes `command`, or only reports it when `dry_run` is set.
    pub async fn apply_set(
        &self,
        vendor: &'static Vendor,
        mac: MacAddress,
        command: &SetCommand,
        dry_run: bool,
    ) -> RotationOutcome {
        if dry_run {
            self.reporter.would_run(command);
            return RotationOutcome::Success { vendor, mac };
        }

        debug!(%command, "applying");
        match self.runner.run(command).await {
            Ok(()) => RotationOutcome::Success { vendor, mac },
            Err(error) => RotationOutcome::Failure { error },
        }
    }

    pub fn failure_count(&self) -> usize {
        self.ledger.failure_count()
    }
}
