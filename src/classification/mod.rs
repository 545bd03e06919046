//! Display Classification Module
//!
//! Resolves hardware identifiers to panel densities and estimates a density
//! when the identifier is unknown.

pub mod estimator;
pub mod resolver;
pub mod table;

pub use estimator::*;
pub use resolver::*;
pub use table::*;
