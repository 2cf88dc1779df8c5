//! # Macrotate Core
//!
//! Periodic hardware address rotation, organized with **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! * **[`domain`]**: Vendors, addresses, jitter and the failure ledger. Pure Rust, no IO.
//!     * *Center of the Hexagon*.
//! * **[`application`]**: The rotation loop. Orchestrates the Domain and Ports.
//!     * *Application Layer*.
//! * **[`ports`]**: Traits the loop talks through (command building, process execution, sleeping, reporting).
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of Ports for the host OS and tokio.
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
