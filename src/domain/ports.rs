//! Domain Ports - Host platform boundaries
//!
//! The resolver never talks to the operating system directly. Hosts provide
//! the raw hardware identifier and the display signals through these traits.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Device Class
// =============================================================================

/// Form-factor class reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Handheld phone-class device (phones, media players)
    Phone,
    /// Tablet-class device
    Tablet,
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Phone => write!(f, "phone"),
            DeviceClass::Tablet => write!(f, "tablet"),
        }
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "phone" | "handheld" => Ok(DeviceClass::Phone),
            "tablet" | "pad" => Ok(DeviceClass::Tablet),
            other => Err(Error::Configuration(format!(
                "Unknown device class: {}",
                other
            ))),
        }
    }
}

// =============================================================================
// Scale Signal
// =============================================================================

/// Logical and native scale factors of the main display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSignal {
    /// Points to device pixels
    pub logical: f64,
    /// Points to physical panel pixels
    pub native: f64,
}

impl ScaleSignal {
    /// Scale where the OS renders at the panel's native resolution
    pub fn uniform(scale: f64) -> Self {
        Self {
            logical: scale,
            native: scale,
        }
    }

    /// Scale where the logical buffer differs from the panel grid
    pub fn new(logical: f64, native: f64) -> Self {
        Self { logical, native }
    }

    /// Both factors finite and positive
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.logical) && ok(self.native) {
            Ok(())
        } else {
            Err(Error::InvalidScale {
                logical: self.logical,
                native: self.native,
            })
        }
    }

    /// Whether the OS downsamples or zooms relative to the panel
    pub fn is_non_native(&self) -> bool {
        self.logical != self.native
    }
}

// =============================================================================
// Identity Port
// =============================================================================

/// Port for the platform's raw hardware model identifier
pub trait IdentityProvider: Send + Sync {
    /// Identifier such as `"iPhone14,5"`, or `None` when unavailable
    fn current_hardware_identifier(&self) -> Option<String>;
}

// =============================================================================
// Display Signal Port
// =============================================================================

/// Port for the display signals reported by the operating system
pub trait DisplaySignalProvider: Send + Sync {
    /// Form-factor class of the device
    fn current_device_class(&self) -> DeviceClass;

    /// Logical and native scale of the main display
    fn current_scale(&self) -> ScaleSignal;
}

// =============================================================================
// Type Aliases for Arc'd Traits
// =============================================================================

pub type IdentityProviderRef = Arc<dyn IdentityProvider>;
pub type DisplaySignalProviderRef = Arc<dyn DisplaySignalProvider>;
