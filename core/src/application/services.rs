//! # Application Services
//!
//! ## Available Services
//! * [`rotation::RotationService`]: The generate → apply → wait loop.

pub mod rotation;
