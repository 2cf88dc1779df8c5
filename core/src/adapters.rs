//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`] for the host system.
//!
//! * **[`outbound`]** (Driven): platform command builders, the process runner
//!   and the tokio backed sleeper.
//!
//! The terminal reporter lives in the CLI crate, next to the logging setup it
//! depends on.

pub mod outbound;
