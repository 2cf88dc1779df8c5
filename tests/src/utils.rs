//! Scripted and recording stand-ins for the rotation ports.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use macrotate_common::error::CommandError;
use macrotate_core::domain::models::command::SetCommand;
use macrotate_core::domain::models::mac::MacAddress;
use macrotate_core::domain::models::vendor::Vendor;
use macrotate_core::ports::outbound::command_runner::CommandRunner;
use macrotate_core::ports::outbound::rotation_reporter::RotationReporter;
use macrotate_core::ports::outbound::sleeper::Sleeper;

/// Everything observable about a run, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Ran(SetCommand),
    WouldRun(SetCommand),
    Changed { vendor: String, mac: String },
    Failed { message: String, remaining: usize },
    Waiting(Duration),
    Slept(Duration),
}

#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn ran(&self) -> Vec<SetCommand> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Ran(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }

    pub fn remaining_counts(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failed { remaining, .. } => Some(remaining),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

/// Answers each run with the next scripted exit code, `0` meaning success.
///
/// Once the script is exhausted every further run succeeds.
pub struct ScriptedRunner {
    exits: Mutex<VecDeque<i32>>,
    journal: Journal,
}

impl ScriptedRunner {
    pub fn new(exits: impl IntoIterator<Item = i32>, journal: Journal) -> Self {
        Self {
            exits: Mutex::new(exits.into_iter().collect()),
            journal,
        }
    }
}

#[async_trait::async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &SetCommand) -> Result<(), CommandError> {
        self.journal.push(Event::Ran(command.clone()));
        match self.exits.lock().unwrap().pop_front().unwrap_or(0) {
            0 => Ok(()),
            code => Err(CommandError::Exit {
                program: command.program.clone(),
                code,
            }),
        }
    }
}

/// Records the requested wait before sleeping on the tokio clock.
///
/// Tests run with a paused clock, so the sleep completes instantly.
pub struct RecordingSleeper(pub Journal);

#[async_trait::async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.0.push(Event::Slept(duration));
        tokio::time::sleep(duration).await;
    }
}

pub struct RecordingReporter(pub Journal);

impl RotationReporter for RecordingReporter {
    fn would_run(&self, command: &SetCommand) {
        self.0.push(Event::WouldRun(command.clone()));
    }

    fn address_changed(&self, vendor: &Vendor, mac: &MacAddress) {
        self.0.push(Event::Changed {
            vendor: vendor.name.to_string(),
            mac: mac.to_string(),
        });
    }

    fn change_failed(&self, error: &CommandError, remaining: usize) {
        self.0.push(Event::Failed {
            message: error.to_string(),
            remaining,
        });
    }

    fn waiting(&self, wait: Duration) {
        self.0.push(Event::Waiting(wait));
    }
}
