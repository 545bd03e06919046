//! PPI Resolution Facade
//!
//! Exact table lookup first; on a miss, estimate from the display signals
//! and hand back the miss alongside the estimate.

use crate::classification::{Estimator, GuessRule, KnownModel, LookupResult, Resolver};
use crate::config::PpiConfig;
use crate::domain::ports::{
    DisplaySignalProvider, DisplaySignalProviderRef, IdentityProvider, IdentityProviderRef,
};
use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// Resolution Outcome
// =============================================================================

/// Density of the current display and how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// The hardware identifier is known
    Exact { ppi: f64, model: KnownModel },
    /// The identifier is unknown; `ppi` is an estimate
    BestGuess {
        ppi: f64,
        reason: LookupError,
        rule: GuessRule,
    },
}

impl ResolutionOutcome {
    /// Usable density, exact or estimated
    pub fn ppi(&self) -> f64 {
        match self {
            ResolutionOutcome::Exact { ppi, .. } | ResolutionOutcome::BestGuess { ppi, .. } => *ppi,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ResolutionOutcome::Exact { .. })
    }

    /// Why the density is a guess, if it is one
    pub fn reason(&self) -> Option<&LookupError> {
        match self {
            ResolutionOutcome::Exact { .. } => None,
            ResolutionOutcome::BestGuess { reason, .. } => Some(reason),
        }
    }

    /// Marketing name of the matched model
    pub fn model_name(&self) -> Option<&str> {
        match self {
            ResolutionOutcome::Exact { model, .. } => Some(model.name.as_ref()),
            ResolutionOutcome::BestGuess { .. } => None,
        }
    }
}

impl std::fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionOutcome::Exact { ppi, model } => {
                write!(f, "{} ppi ({}, {})", ppi, model.name, model.identifier)
            }
            ResolutionOutcome::BestGuess { ppi, reason, rule } => {
                write!(f, "{} ppi, best guess by {} ({})", ppi, rule, reason)
            }
        }
    }
}

// =============================================================================
// PPI Resolver
// =============================================================================

/// Resolves the density of the current device's display
pub struct PpiResolver {
    identity: IdentityProviderRef,
    display: DisplaySignalProviderRef,
    resolver: Arc<Resolver>,
    estimator: Estimator,
    placeholder: String,
}

impl PpiResolver {
    /// Create a resolver over the built-in table with default densities
    pub fn new(identity: IdentityProviderRef, display: DisplaySignalProviderRef) -> Self {
        let config = PpiConfig::default();
        Self {
            identity,
            display,
            resolver: Resolver::builtin(),
            estimator: Estimator::with_config(config.estimator),
            placeholder: config.placeholder_identifier,
        }
    }

    /// Create a resolver from configuration
    pub fn with_config(
        identity: IdentityProviderRef,
        display: DisplaySignalProviderRef,
        config: &PpiConfig,
    ) -> Result<Self> {
        config.validate()?;

        let resolver = if config.extra_models.is_empty() {
            Resolver::builtin()
        } else {
            Arc::new(config.build_resolver()?)
        };

        Ok(Self {
            identity,
            display,
            resolver,
            estimator: Estimator::with_config(config.estimator.clone()),
            placeholder: config.placeholder_identifier.clone(),
        })
    }

    /// Underlying identifier resolver
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve the current display density. Never fails.
    pub fn resolve_ppi(&self) -> ResolutionOutcome {
        let identifier = self
            .identity
            .current_hardware_identifier()
            .unwrap_or_else(|| {
                debug!(placeholder = %self.placeholder, "Hardware identifier unavailable");
                self.placeholder.clone()
            });

        resolve_with(
            &self.resolver,
            &self.estimator,
            &identifier,
            self.display.as_ref(),
        )
    }
}

impl std::fmt::Debug for PpiResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PpiResolver")
            .field("models", &self.resolver.len())
            .field("estimator", self.estimator.config())
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

/// One-shot resolution over the built-in table and default densities
pub fn resolve_ppi(
    identity: &dyn IdentityProvider,
    display: &dyn DisplaySignalProvider,
) -> ResolutionOutcome {
    let identifier = identity
        .current_hardware_identifier()
        .unwrap_or_else(|| crate::config::DEFAULT_PLACEHOLDER_IDENTIFIER.to_string());
    resolve_with(&Resolver::builtin(), &Estimator::new(), &identifier, display)
}

fn resolve_with(
    resolver: &Resolver,
    estimator: &Estimator,
    identifier: &str,
    display: &dyn DisplaySignalProvider,
) -> ResolutionOutcome {
    match resolver.lookup(identifier) {
        LookupResult::Found(model) => ResolutionOutcome::Exact {
            ppi: model.ppi,
            model,
        },
        LookupResult::NotFound(reason) => {
            // Display signals are only read on a miss
            let class = display.current_device_class();
            let scale = display.current_scale();
            let estimate = estimator.estimate(class, scale);

            warn!(
                identifier = %reason.identifier(),
                device_class = %class,
                logical_scale = scale.logical,
                native_scale = scale.native,
                ppi = estimate.ppi,
                rule = %estimate.rule,
                "Unknown hardware identifier, using best-guess density"
            );

            ResolutionOutcome::BestGuess {
                ppi: estimate.ppi,
                reason,
                rule: estimate.rule,
            }
        }
    }
}
