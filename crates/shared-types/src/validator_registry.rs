//! # Validator Registry
//!
//! Maps each entity kind to the validator responsible for it. Built once at
//! startup, then shared read-only by every save path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = ValidatorRegistry::new();
//! registry.register(Arc::new(OrderTypeValidator::new(store.clone(), store)));
//!
//! // Save path: stop the save when anything is rejected
//! registry.validate_or_reject(&order_type)?;
//! ```

use crate::entities::{Entity, EntityKind};
use crate::errors::{ValidationError, ValidationFault};
use crate::rejection::{RejectionSink, ValidationErrors};
use crate::validator_trait::DynValidator;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Central registry of entity validators.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<EntityKind, DynValidator>,
}

impl ValidatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator under its kind.
    ///
    /// A validator already registered for the same kind is replaced.
    pub fn register(&mut self, validator: DynValidator) {
        let kind = validator.kind();

        info!(
            "[Registry] Registering validator {} for {}",
            validator.name(),
            kind
        );

        if let Some(previous) = self.validators.insert(kind, validator) {
            warn!(
                "[Registry] Validator {} for {} replaced",
                previous.name(),
                kind
            );
        }
    }

    /// Check if a validator is registered for `kind`.
    pub fn is_registered(&self, kind: EntityKind) -> bool {
        self.validators.contains_key(&kind)
    }

    /// Get the validator for `kind`.
    pub fn validator_for(&self, kind: EntityKind) -> Option<DynValidator> {
        self.validators.get(&kind).cloned()
    }

    /// All kinds with a registered validator, sorted.
    pub fn kinds(&self) -> Vec<EntityKind> {
        let mut kinds: Vec<_> = self.validators.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Dispatch `entity` to the validator registered for its kind.
    pub fn validate(
        &self,
        entity: &dyn Entity,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault> {
        let kind = entity.kind();
        let validator = self
            .validators
            .get(&kind)
            .ok_or(ValidationFault::NoValidator(kind))?;

        debug!("[Registry] Dispatching {} to {}", kind, validator.name());
        validator.validate(Some(entity), errors)
    }

    /// Validate `entity` and fail when anything was rejected.
    ///
    /// This is the shape of the save-time hook: the caller commits only on `Ok`.
    pub fn validate_or_reject(&self, entity: &dyn Entity) -> Result<(), ValidationError> {
        let kind = entity.kind();
        let mut errors = ValidationErrors::new(object_name(kind));

        self.validate(entity, &mut errors)?;

        errors
            .into_result()
            .map_err(|errors| ValidationError::Rejected { kind, errors })
    }
}

/// Form-binding object name for a kind, e.g. `orderType`.
fn object_name(kind: EntityKind) -> String {
    let name = kind.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
