//! # Error Types
//!
//! Errors shared by the rotation core and the command line front end.
//!
//! * [`CommandError`]: a single address change that did not succeed. These are
//!   recorded and tolerated up to [`crate::config::MAX_FAILURES`].
//! * [`RotationError`]: fatal errors that end a run.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with status {code}")]
    Exit { program: String, code: i32 },
    #[error("`{program}` was terminated by a signal")]
    Signaled { program: String },
}

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("too many MAC change errors occurred:\n{}", .messages.join("\n"))]
    TooManyFailures { messages: Vec<String> },
    #[error("platform `{0}` is not supported, expected Linux, macOS or a BSD")]
    UnsupportedPlatform(String),
}
