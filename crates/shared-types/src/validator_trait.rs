//! # Validator Trait
//!
//! The contract every entity validator implements so the registry can route
//! an entity to it by kind, with no reflection involved.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use shared_types::{Entity, EntityKind, RejectionSink, ValidationFault, Validator};
//!
//! pub struct ConceptClassValidator;
//!
//! impl Validator for ConceptClassValidator {
//!     fn kind(&self) -> EntityKind { EntityKind::ConceptClass }
//!     fn validate(
//!         &self,
//!         target: Option<&dyn Entity>,
//!         errors: &mut dyn RejectionSink,
//!     ) -> Result<(), ValidationFault> {
//!         let class = downcast_target::<ConceptClass>(target, self.kind())?;
//!         // ... rules
//!         Ok(())
//!     }
//! }
//! ```

use crate::entities::{Entity, EntityKind};
use crate::errors::ValidationFault;
use crate::rejection::RejectionSink;
use std::sync::Arc;

/// A rule set for one entity kind.
pub trait Validator: Send + Sync {
    /// The kind this validator is registered for.
    fn kind(&self) -> EntityKind;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;

    /// Whether this validator handles `kind`.
    fn supports(&self, kind: EntityKind) -> bool {
        self.kind() == kind
    }

    /// Validate `target`, recording rejections in `errors`.
    ///
    /// Returns `Err` only when validation cannot run: an absent or
    /// wrong-kind target, or a failed collaborator lookup. Rejected data is
    /// reported through `errors` and still yields `Ok(())`.
    fn validate(
        &self,
        target: Option<&dyn Entity>,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault>;
}

/// Shared validator handle held by the registry.
pub type DynValidator = Arc<dyn Validator>;

/// Resolve `target` to the concrete type `T` a validator owns.
///
/// Absent targets and targets of another kind are invalid-argument faults.
pub fn downcast_target<T: Entity>(
    target: Option<&dyn Entity>,
    expected: EntityKind,
) -> Result<&T, ValidationFault> {
    let target = target.ok_or(ValidationFault::MissingTarget { expected })?;
    target
        .as_any()
        .downcast_ref::<T>()
        .ok_or(ValidationFault::WrongKind {
            expected,
            actual: target.kind(),
        })
}
