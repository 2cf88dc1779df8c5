use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use macrotate_common::error::CommandError;

use crate::domain::models::command::SetCommand;
use crate::ports::outbound::command_runner::CommandRunner;

/// Runs set commands as child processes.
///
/// The child shares this process' stdout and stderr. Dropping the future
/// returned by [`CommandRunner::run`] kills the child.
pub struct ProcessRunner;

#[async_trait::async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &SetCommand) -> Result<(), CommandError> {
        debug!(program = %command.program, args = ?command.args, "spawning");

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| CommandError::Launch {
                program: command.program.clone(),
                source,
            })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(CommandError::Exit {
                program: command.program.clone(),
                code,
            }),
            None => Err(CommandError::Signaled {
                program: command.program.clone(),
            }),
        }
    }
}
