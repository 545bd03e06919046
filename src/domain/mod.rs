//! Domain layer - Display signal types and port definitions
//!
//! This module defines the traits (ports) the host platform implements to
//! hand the resolver its hardware identifier and display signals.

pub mod ports;

pub use ports::*;
