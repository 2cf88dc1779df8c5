//! Operating system adapters.
//!
//! [`platform::Platform`] is detected once at startup and hands out the
//! matching [`crate::ports::outbound::address_setter::AddressSetter`].

pub mod ifconfig;
pub mod ip_link;
pub mod platform;
pub mod process_runner;
