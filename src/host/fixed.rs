//! Fixed-value collaborators

use crate::domain::ports::{DeviceClass, DisplaySignalProvider, IdentityProvider, ScaleSignal};

/// Identity provider returning a preset identifier
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity {
    identifier: Option<String>,
}

impl FixedIdentity {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
        }
    }

    /// Provider that reports no identifier
    pub fn unavailable() -> Self {
        Self { identifier: None }
    }
}

impl From<Option<String>> for FixedIdentity {
    fn from(identifier: Option<String>) -> Self {
        Self { identifier }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_hardware_identifier(&self) -> Option<String> {
        self.identifier.clone()
    }
}

/// Display provider returning preset signals
#[derive(Debug, Clone, Copy)]
pub struct FixedDisplay {
    class: DeviceClass,
    scale: ScaleSignal,
}

impl FixedDisplay {
    pub fn new(class: DeviceClass, scale: ScaleSignal) -> Self {
        Self { class, scale }
    }

    pub fn phone(scale: ScaleSignal) -> Self {
        Self::new(DeviceClass::Phone, scale)
    }

    pub fn tablet(scale: ScaleSignal) -> Self {
        Self::new(DeviceClass::Tablet, scale)
    }
}

impl DisplaySignalProvider for FixedDisplay {
    fn current_device_class(&self) -> DeviceClass {
        self.class
    }

    fn current_scale(&self) -> ScaleSignal {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_identity() {
        assert_eq!(
            FixedIdentity::new("iPad2,1").current_hardware_identifier(),
            Some("iPad2,1".to_string())
        );
        assert_eq!(FixedIdentity::unavailable().current_hardware_identifier(), None);
        assert_eq!(FixedIdentity::from(None).current_hardware_identifier(), None);
    }

    #[test]
    fn test_fixed_display() {
        let display = FixedDisplay::tablet(ScaleSignal::uniform(2.0));
        assert_eq!(display.current_device_class(), DeviceClass::Tablet);
        assert_eq!(display.current_scale(), ScaleSignal::uniform(2.0));
    }
}
