//! Device PPI - Physical Display Density Resolution
//!
//! Resolves the physical pixel density (pixels per inch) of the current
//! device's display from its hardware model identifier. Operating systems
//! expose only a logical scale factor, which is not enough for rendering at
//! true physical size.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          PpiResolver (facade)                                │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────┐        ┌───────────────────────────────────┐ │
//! │  │   Resolver                │  miss  │   Estimator                       │ │
//! │  │   identifier -> ppi       │ ─────▶ │   (device class, scale) -> ppi    │ │
//! │  │   (flattened index)       │        │   (fixed decision rules)          │ │
//! │  └─────────────┬─────────────┘        └───────────────────────────────────┘ │
//! │                │                                                             │
//! │   ┌────────────┴────────────┐                                                │
//! │   │  Classification Table   │                                                │
//! │   │  (static, immutable)    │                                                │
//! │   └─────────────────────────┘                                                │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │                          Host Platform Ports                                 │
//! │  ┌───────────────────────────┐        ┌───────────────────────────────────┐ │
//! │  │   IdentityProvider        │        │   DisplaySignalProvider           │ │
//! │  └───────────────────────────┘        └───────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`classification`]: Static table, identifier resolver, density estimator
//! - [`ppi`]: Facade returning an exact or best-guess outcome
//! - [`domain`]: Display signal types and host platform traits
//! - [`host`]: Fixed-value host adapters
//! - [`config`]: YAML configuration
//! - [`error`]: Error types and handling

pub mod classification;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod ppi;

// Re-export commonly used types
pub use classification::{
    ClassificationEntry, ClassificationTable, DeviceModel, Estimate, Estimator, EstimatorConfig,
    GuessRule, KnownModel, LookupResult, Resolver, CLASSIFICATION_TABLE,
};

pub use config::{ExtraModel, PpiConfig, DEFAULT_PLACEHOLDER_IDENTIFIER};

pub use domain::ports::{
    DeviceClass, DisplaySignalProvider, DisplaySignalProviderRef, IdentityProvider,
    IdentityProviderRef, ScaleSignal,
};

pub use error::{Error, LookupError, Result};

pub use host::{FixedDisplay, FixedIdentity};

pub use ppi::{resolve_ppi, PpiResolver, ResolutionOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
