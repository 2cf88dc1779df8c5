//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the rotation loop* towards the host.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. These traits are implemented in `adapters/outbound` (and by the CLI for reporting).
pub mod address_setter;
pub mod command_runner;
pub mod rotation_reporter;
pub mod sleeper;
