//! # Ports Layer (Boundaries)
//!
//! Defines the interfaces (traits) that isolate the rotation loop from the host.
//!
//! * **[`outbound`]** (Secondary/Driven): what the loop needs from the outside world,
//!   building and running commands, waiting, and reporting progress.
//!
//! The loop itself is driven directly by the CLI, there are no inbound ports.

pub mod outbound;
