//! Host Adapters
//!
//! Collaborator implementations for hosts that already hold the hardware
//! identifier and display signals.

pub mod fixed;

pub use fixed::*;
