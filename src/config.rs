//! Resolver Configuration
//!
//! Optional YAML configuration for hosts that need to add hardware released
//! after this crate or tune the fallback densities.

use crate::classification::{EstimatorConfig, Resolver, CLASSIFICATION_TABLE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Identifier substituted when the host cannot report one
pub const DEFAULT_PLACEHOLDER_IDENTIFIER: &str = "n/a";

/// Host-supplied table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraModel {
    /// Hardware identifier
    pub identifier: String,
    /// Marketing name, defaults to the identifier
    #[serde(default)]
    pub name: Option<String>,
    /// Physical pixels per inch
    pub ppi: f64,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PpiConfig {
    /// Sentinel identifier used when none is available
    pub placeholder_identifier: String,
    /// Fallback densities
    pub estimator: EstimatorConfig,
    /// Rows appended to the built-in table
    pub extra_models: Vec<ExtraModel>,
}

impl Default for PpiConfig {
    fn default() -> Self {
        Self {
            placeholder_identifier: DEFAULT_PLACEHOLDER_IDENTIFIER.to_string(),
            estimator: EstimatorConfig::default(),
            extra_models: Vec::new(),
        }
    }
}

impl PpiConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: PpiConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!(
            path = %path.display(),
            extra_models = config.extra_models.len(),
            "Loaded PPI configuration"
        );
        Ok(config)
    }

    /// Check densities and that the placeholder can never match
    pub fn validate(&self) -> Result<()> {
        self.estimator.validate()?;

        if CLASSIFICATION_TABLE.find(&self.placeholder_identifier).is_some()
            || self
                .extra_models
                .iter()
                .any(|m| m.identifier == self.placeholder_identifier)
        {
            return Err(Error::Configuration(format!(
                "placeholder_identifier {:?} matches a known hardware identifier",
                self.placeholder_identifier
            )));
        }
        Ok(())
    }

    /// Resolver over the built-in table plus `extra_models`
    pub fn build_resolver(&self) -> Result<Resolver> {
        Resolver::with_extra_models(&CLASSIFICATION_TABLE, &self.extra_models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PpiConfig::default();
        assert_eq!(config.placeholder_identifier, "n/a");
        assert_eq!(config.estimator, EstimatorConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
placeholder_identifier: unknown-device
estimator:
  phone_baseline_ppi: 330
extra_models:
  - identifier: "iPhone15,4"
    name: iPhone 15
    ppi: 460
  - identifier: "iPad14,3"
    ppi: 264
"#;
        let config = PpiConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.placeholder_identifier, "unknown-device");
        assert_eq!(config.estimator.phone_baseline_ppi, 330.0);
        assert_eq!(config.estimator.tablet_retina_ppi, 264.0);
        assert_eq!(config.extra_models.len(), 2);
        assert_eq!(config.extra_models[1].name, None);

        let resolver = config.build_resolver().unwrap();
        assert_eq!(resolver.lookup("iPhone15,4").ppi(), Some(460.0));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PpiConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PpiConfig::default());
    }

    #[test]
    fn test_placeholder_must_not_match() {
        assert_matches!(
            PpiConfig::from_yaml_str("placeholder_identifier: \"iPhone14,5\""),
            Err(Error::Configuration(_))
        );
    }

    #[test]
    fn test_invalid_yaml() {
        assert_matches!(
            PpiConfig::from_yaml_str("extra_models: nope"),
            Err(Error::YamlParse(_))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "estimator:\n  tablet_legacy_ppi: 150").unwrap();

        let config = PpiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.estimator.tablet_legacy_ppi, 150.0);

        assert_matches!(
            PpiConfig::from_file("/nonexistent/device-ppi.yaml"),
            Err(Error::Io(_))
        );
    }
}
