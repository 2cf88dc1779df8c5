//! # Domain Layer (Core)
//!
//! The heart of the application. Contains the rotation rules and models.
//!
//! ## Characteristics
//! * **Pure Rust**: No IO, no process spawning, no clocks. Randomness is always
//!   drawn from a caller supplied [`rand::Rng`], so everything here is
//!   reproducible with a seeded generator.
//! * **Independence**: Does not know about Ports, Adapters, or the Application layer.
//!
//! ## Contents
//! * **[`models`]**: Vendors, MAC addresses, set commands and rotation outcomes.
//! * **[`jitter`]**: Randomized wait times around the base cycle length.
//! * **[`ledger`]**: Failure accumulation and the stop threshold.

pub mod jitter;
pub mod ledger;
pub mod models;
