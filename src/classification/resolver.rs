//! Identifier Resolver
//!
//! Flattens the classification table into an identifier index once, then
//! answers exact lookups in constant time.

use super::table::{ClassificationTable, CLASSIFICATION_TABLE};
use crate::config::ExtraModel;
use crate::error::{Error, LookupError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

static BUILTIN: Lazy<Arc<Resolver>> =
    Lazy::new(|| Arc::new(Resolver::from_table(&CLASSIFICATION_TABLE)));

// =============================================================================
// Lookup Result
// =============================================================================

/// A model known to the resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownModel {
    /// Hardware identifier
    pub identifier: Cow<'static, str>,
    /// Marketing name
    pub name: Cow<'static, str>,
    /// Physical pixels per inch
    pub ppi: f64,
}

/// Outcome of an exact lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Identifier is in the index
    Found(KnownModel),
    /// Identifier is not in the index
    NotFound(LookupError),
}

impl LookupResult {
    /// Density when found
    pub fn ppi(&self) -> Option<f64> {
        match self {
            LookupResult::Found(model) => Some(model.ppi),
            LookupResult::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Convert into a `Result`, surfacing the miss as an error
    pub fn into_result(self) -> std::result::Result<KnownModel, LookupError> {
        match self {
            LookupResult::Found(model) => Ok(model),
            LookupResult::NotFound(err) => Err(err),
        }
    }
}

// =============================================================================
// Index Builder
// =============================================================================

struct IndexBuilder {
    index: HashMap<Cow<'static, str>, KnownModel>,
    strict: bool,
}

impl IndexBuilder {
    fn new(strict: bool) -> Self {
        Self {
            index: HashMap::new(),
            strict,
        }
    }

    fn insert(&mut self, model: KnownModel) -> Result<()> {
        match self.index.entry(model.identifier.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(model);
                Ok(())
            }
            Entry::Occupied(existing) => {
                if self.strict {
                    return Err(Error::DuplicateIdentifier {
                        identifier: model.identifier.into_owned(),
                        first_ppi: existing.get().ppi,
                        second_ppi: model.ppi,
                    });
                }
                // First entry wins, matching a linear scan of the table
                warn!(
                    identifier = %model.identifier,
                    kept_ppi = existing.get().ppi,
                    skipped_ppi = model.ppi,
                    "Duplicate hardware identifier in classification table"
                );
                Ok(())
            }
        }
    }

    fn insert_table(&mut self, table: &ClassificationTable) -> Result<()> {
        for (model, ppi) in table.models() {
            self.insert(KnownModel {
                identifier: Cow::Borrowed(model.identifier),
                name: Cow::Borrowed(model.name),
                ppi,
            })?;
        }
        Ok(())
    }

    fn finish(self) -> Resolver {
        Resolver { index: self.index }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Exact identifier to PPI resolver
#[derive(Debug, Clone)]
pub struct Resolver {
    index: HashMap<Cow<'static, str>, KnownModel>,
}

impl Resolver {
    /// Shared resolver over the built-in table
    pub fn builtin() -> Arc<Resolver> {
        Arc::clone(&BUILTIN)
    }

    /// Build from a table; a duplicated identifier keeps its first density
    pub fn from_table(table: &ClassificationTable) -> Self {
        let mut builder = IndexBuilder::new(false);
        // Lenient builder never rejects
        let _ = builder.insert_table(table);
        builder.finish()
    }

    /// Build from a table, rejecting any duplicated identifier
    pub fn strict(table: &ClassificationTable) -> Result<Self> {
        let mut builder = IndexBuilder::new(true);
        builder.insert_table(table)?;
        Ok(builder.finish())
    }

    /// Build from a table plus host-supplied models.
    ///
    /// Extra models must carry a positive, finite density and must not
    /// collide with the table or with each other.
    pub fn with_extra_models(table: &ClassificationTable, extras: &[ExtraModel]) -> Result<Self> {
        let mut builder = IndexBuilder::new(false);
        builder.insert_table(table)?;
        builder.strict = true;

        for extra in extras {
            if !(extra.ppi.is_finite() && extra.ppi > 0.0) {
                return Err(Error::InvalidPpi {
                    identifier: extra.identifier.clone(),
                    ppi: extra.ppi,
                });
            }
            builder.insert(KnownModel {
                identifier: Cow::Owned(extra.identifier.clone()),
                name: Cow::Owned(
                    extra
                        .name
                        .clone()
                        .unwrap_or_else(|| extra.identifier.clone()),
                ),
                ppi: extra.ppi,
            })?;
        }

        debug!(extra_models = extras.len(), "Built resolver with extra models");
        Ok(builder.finish())
    }

    /// Look up an identifier: exact, case-sensitive, no normalization
    pub fn lookup(&self, identifier: &str) -> LookupResult {
        match self.index.get(identifier) {
            Some(model) => {
                debug!(identifier, ppi = model.ppi, name = %model.name, "Hardware identifier matched");
                LookupResult::Found(model.clone())
            }
            None => LookupResult::NotFound(LookupError::UnknownHardwareIdentifier {
                identifier: identifier.to_string(),
            }),
        }
    }

    /// Marketing name of a known identifier
    pub fn model_name(&self, identifier: &str) -> Option<&str> {
        self.index.get(identifier).map(|m| m.name.as_ref())
    }

    /// Number of indexed identifiers
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All known models, sorted by identifier
    pub fn models(&self) -> Vec<&KnownModel> {
        let mut models: Vec<&KnownModel> = self.index.values().collect();
        models.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        models
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::table::{ClassificationEntry, DeviceModel};
    use assert_matches::assert_matches;

    static MALFORMED: ClassificationTable = ClassificationTable::new(&[
        ClassificationEntry {
            models: &[DeviceModel {
                identifier: "Dev1,1",
                name: "First",
            }],
            ppi: 300.0,
        },
        ClassificationEntry {
            models: &[DeviceModel {
                identifier: "Dev1,1",
                name: "Again",
            }],
            ppi: 400.0,
        },
    ]);

    fn extra(identifier: &str, ppi: f64) -> ExtraModel {
        ExtraModel {
            identifier: identifier.to_string(),
            name: None,
            ppi,
        }
    }

    #[test]
    fn test_every_table_identifier_resolves_exactly() {
        let resolver = Resolver::builtin();
        for (model, ppi) in CLASSIFICATION_TABLE.models() {
            let found = resolver.lookup(model.identifier).into_result().unwrap();
            assert_eq!(found.ppi, ppi, "{}", model.identifier);
            assert_eq!(found.name, model.name);
        }
        assert_eq!(resolver.len(), CLASSIFICATION_TABLE.identifier_count());
    }

    #[test]
    fn test_known_scenarios() {
        let resolver = Resolver::builtin();
        assert_eq!(resolver.lookup("iPhone14,5").ppi(), Some(460.0));
        assert_eq!(resolver.lookup("iPad2,1").ppi(), Some(132.0));
        assert_eq!(resolver.lookup("iPhone13,1").ppi(), Some(476.0));
        assert_eq!(resolver.model_name("iPhone14,5"), Some("iPhone 13"));
    }

    #[test]
    fn test_unknown_identifiers_not_found() {
        let resolver = Resolver::builtin();
        for id in ["iPhone99,9", "", "IPHONE14,5", " iPad2,1", "x86_64", "n/a"] {
            assert_matches!(
                resolver.lookup(id),
                LookupResult::NotFound(LookupError::UnknownHardwareIdentifier { identifier }) if identifier == id
            );
        }
    }

    #[test]
    fn test_builtin_strict_build_succeeds() {
        let strict = Resolver::strict(&CLASSIFICATION_TABLE).unwrap();
        assert_eq!(strict.len(), Resolver::builtin().len());
    }

    #[test]
    fn test_malformed_table() {
        assert_matches!(
            Resolver::strict(&MALFORMED),
            Err(Error::DuplicateIdentifier { first_ppi, second_ppi, .. })
                if first_ppi == 300.0 && second_ppi == 400.0
        );

        let lenient = Resolver::from_table(&MALFORMED);
        assert_eq!(lenient.lookup("Dev1,1").ppi(), Some(300.0));
        assert_eq!(lenient.model_name("Dev1,1"), Some("First"));
    }

    #[test]
    fn test_extra_models() {
        let resolver = Resolver::with_extra_models(
            &CLASSIFICATION_TABLE,
            &[
                ExtraModel {
                    identifier: "iPhone15,4".into(),
                    name: Some("iPhone 15".into()),
                    ppi: 460.0,
                },
                extra("iPad14,3", 264.0),
            ],
        )
        .unwrap();

        assert_eq!(resolver.lookup("iPhone15,4").ppi(), Some(460.0));
        assert_eq!(resolver.model_name("iPhone15,4"), Some("iPhone 15"));
        assert_eq!(resolver.model_name("iPad14,3"), Some("iPad14,3"));
        assert_eq!(resolver.len(), CLASSIFICATION_TABLE.identifier_count() + 2);
    }

    #[test]
    fn test_extra_models_rejected() {
        assert_matches!(
            Resolver::with_extra_models(&CLASSIFICATION_TABLE, &[extra("iPhone14,5", 999.0)]),
            Err(Error::DuplicateIdentifier { .. })
        );
        assert_matches!(
            Resolver::with_extra_models(
                &CLASSIFICATION_TABLE,
                &[extra("New1,1", 300.0), extra("New1,1", 300.0)]
            ),
            Err(Error::DuplicateIdentifier { .. })
        );
        assert_matches!(
            Resolver::with_extra_models(&CLASSIFICATION_TABLE, &[extra("New1,1", 0.0)]),
            Err(Error::InvalidPpi { .. })
        );
        assert_matches!(
            Resolver::with_extra_models(&CLASSIFICATION_TABLE, &[extra("New1,1", f64::INFINITY)]),
            Err(Error::InvalidPpi { .. })
        );
    }

    #[test]
    fn test_models_sorted() {
        let resolver = Resolver::builtin();
        let models = resolver.models();
        assert_eq!(models.len(), resolver.len());
        assert!(models.windows(2).all(|w| w[0].identifier <= w[1].identifier));
    }
}
