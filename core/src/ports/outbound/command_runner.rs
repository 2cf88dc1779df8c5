use macrotate_common::error::CommandError;

use crate::domain::models::command::SetCommand;

/// Executes a [`SetCommand`] to completion.
///
/// Implementations must not return before the command has exited, the loop
/// relies on this to keep attempts strictly sequential.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &SetCommand) -> Result<(), CommandError>;
}
