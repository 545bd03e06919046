//! Density Estimator
//!
//! Best-guess PPI for hardware the table does not know, derived only from
//! the device class and the display scale factors.

use crate::domain::ports::{DeviceClass, ScaleSignal};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Estimator Configuration
// =============================================================================

/// Densities returned by each estimation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Tablet at 2x logical scale
    pub tablet_retina_ppi: f64,
    /// Tablet at any other scale
    pub tablet_legacy_ppi: f64,
    /// Phone rendering 3x natively
    pub phone_native_3x_ppi: f64,
    /// Phone downsampling into a 3x logical buffer
    pub phone_downsampled_3x_ppi: f64,
    /// Phone at 2x or 1x
    pub phone_baseline_ppi: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            tablet_retina_ppi: 264.0,
            tablet_legacy_ppi: 132.0,
            phone_native_3x_ppi: 458.0,
            phone_downsampled_3x_ppi: 401.0,
            phone_baseline_ppi: 326.0,
        }
    }
}

impl EstimatorConfig {
    /// Every density must be positive and finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("tablet_retina_ppi", self.tablet_retina_ppi),
            ("tablet_legacy_ppi", self.tablet_legacy_ppi),
            ("phone_native_3x_ppi", self.phone_native_3x_ppi),
            ("phone_downsampled_3x_ppi", self.phone_downsampled_3x_ppi),
            ("phone_baseline_ppi", self.phone_baseline_ppi),
        ];
        for (name, ppi) in fields {
            if !(ppi.is_finite() && ppi > 0.0) {
                return Err(Error::Configuration(format!(
                    "estimator.{} must be a positive density, got {}",
                    name, ppi
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Estimate
// =============================================================================

/// Rule of the decision procedure that produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessRule {
    TabletRetina,
    TabletLegacy,
    PhoneNative3x,
    PhoneDownsampled3x,
    PhoneBaseline,
}

impl std::fmt::Display for GuessRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessRule::TabletRetina => write!(f, "tablet_retina"),
            GuessRule::TabletLegacy => write!(f, "tablet_legacy"),
            GuessRule::PhoneNative3x => write!(f, "phone_native_3x"),
            GuessRule::PhoneDownsampled3x => write!(f, "phone_downsampled_3x"),
            GuessRule::PhoneBaseline => write!(f, "phone_baseline"),
        }
    }
}

/// Estimated density and the rule behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub ppi: f64,
    pub rule: GuessRule,
}

// =============================================================================
// Estimator
// =============================================================================

/// Total fallback function over (device class, scale)
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Create an estimator with the default densities
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with custom densities
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Best-guess density
    pub fn guess(&self, class: DeviceClass, scale: ScaleSignal) -> f64 {
        self.estimate(class, scale).ppi
    }

    /// Best-guess density with the rule that fired.
    ///
    /// Rules are checked in order and the first match wins:
    /// tablets split on 2x logical scale, phones at 3x split on native 3x,
    /// every other phone gets the baseline density.
    pub fn estimate(&self, class: DeviceClass, scale: ScaleSignal) -> Estimate {
        let rule = Self::select_rule(class, scale);
        let ppi = match rule {
            GuessRule::TabletRetina => self.config.tablet_retina_ppi,
            GuessRule::TabletLegacy => self.config.tablet_legacy_ppi,
            GuessRule::PhoneNative3x => self.config.phone_native_3x_ppi,
            GuessRule::PhoneDownsampled3x => self.config.phone_downsampled_3x_ppi,
            GuessRule::PhoneBaseline => self.config.phone_baseline_ppi,
        };
        Estimate { ppi, rule }
    }

    fn select_rule(class: DeviceClass, scale: ScaleSignal) -> GuessRule {
        match class {
            DeviceClass::Tablet if scale.logical == 2.0 => GuessRule::TabletRetina,
            DeviceClass::Tablet => GuessRule::TabletLegacy,
            DeviceClass::Phone if scale.logical == 3.0 => {
                if scale.native == 3.0 {
                    GuessRule::PhoneNative3x
                } else {
                    GuessRule::PhoneDownsampled3x
                }
            }
            DeviceClass::Phone => GuessRule::PhoneBaseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablet_rules() {
        let estimator = Estimator::new();
        assert_eq!(estimator.guess(DeviceClass::Tablet, ScaleSignal::uniform(2.0)), 264.0);
        assert_eq!(estimator.guess(DeviceClass::Tablet, ScaleSignal::uniform(1.0)), 132.0);
        // Native scale is irrelevant for tablets
        assert_eq!(estimator.guess(DeviceClass::Tablet, ScaleSignal::new(2.0, 2.5)), 264.0);
        assert_eq!(estimator.guess(DeviceClass::Tablet, ScaleSignal::uniform(3.0)), 132.0);
    }

    #[test]
    fn test_phone_rules() {
        let estimator = Estimator::new();
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::uniform(3.0)), 458.0);
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::new(3.0, 2.608)), 401.0);
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::uniform(2.0)), 326.0);
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::uniform(1.0)), 326.0);
        // Zoomed 2x phone still falls to the baseline
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::new(2.0, 2.343)), 326.0);
    }

    #[test]
    fn test_rules_reported() {
        let estimator = Estimator::new();
        let cases = [
            (DeviceClass::Tablet, ScaleSignal::uniform(2.0), GuessRule::TabletRetina),
            (DeviceClass::Tablet, ScaleSignal::uniform(1.0), GuessRule::TabletLegacy),
            (DeviceClass::Phone, ScaleSignal::uniform(3.0), GuessRule::PhoneNative3x),
            (DeviceClass::Phone, ScaleSignal::new(3.0, 2.608), GuessRule::PhoneDownsampled3x),
            (DeviceClass::Phone, ScaleSignal::uniform(2.0), GuessRule::PhoneBaseline),
        ];
        for (class, scale, rule) in cases {
            assert_eq!(estimator.estimate(class, scale).rule, rule);
        }
    }

    #[test]
    fn test_total_and_deterministic() {
        let estimator = Estimator::new();
        let allowed = [458.0, 401.0, 326.0, 264.0, 132.0];
        let scales = [0.5, 1.0, 1.5, 2.0, 2.608, 3.0, 4.0];

        for class in [DeviceClass::Phone, DeviceClass::Tablet] {
            for logical in scales {
                for native in scales {
                    let scale = ScaleSignal::new(logical, native);
                    let first = estimator.guess(class, scale);
                    assert!(allowed.contains(&first), "{:?} {:?} -> {}", class, scale, first);
                    assert_eq!(first, estimator.guess(class, scale));
                }
            }
        }
    }

    #[test]
    fn test_custom_config() {
        let estimator = Estimator::with_config(EstimatorConfig {
            phone_baseline_ppi: 330.0,
            ..Default::default()
        });
        assert_eq!(estimator.guess(DeviceClass::Phone, ScaleSignal::uniform(2.0)), 330.0);
        assert_eq!(estimator.guess(DeviceClass::Tablet, ScaleSignal::uniform(2.0)), 264.0);
    }

    #[test]
    fn test_config_validation() {
        assert!(EstimatorConfig::default().validate().is_ok());
        let bad = EstimatorConfig {
            tablet_legacy_ppi: -1.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
