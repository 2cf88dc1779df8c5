//! # Application Layer (Service Layer)
//!
//! Orchestrates the rotation use case.
//!
//! It does not contain the rotation rules themselves (those belong in `domain`),
//! but rather:
//! 1. Receives the run configuration from the CLI.
//! 2. Calls the Domain for addresses, waits and failure accounting.
//! 3. Calls the Outbound Ports to build, run and report commands.
//!
//! ## Contents
//! * **[`services`]**: Grouped by feature/context.

pub mod services;
