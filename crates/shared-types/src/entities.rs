//! # Entity Kinds
//!
//! Identifies the persisted entity kinds that validators are registered for,
//! and the object-safe `Entity` trait that lets a registry hand any of them
//! to the validator responsible for its kind.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Persisted entity kinds known to the validation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Order-type taxonomy node.
    OrderType,
    /// Concept-class classification tag.
    ConceptClass,
    /// Dictionary concept.
    Concept,
}

impl EntityKind {
    /// Stable name used in logs, metrics labels and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::OrderType => "OrderType",
            Self::ConceptClass => "ConceptClass",
            Self::Concept => "Concept",
        }
    }

    /// Get all entity kinds.
    #[must_use]
    pub fn all() -> Vec<EntityKind> {
        vec![Self::OrderType, Self::ConceptClass, Self::Concept]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted entity that can be routed to a validator.
///
/// Validators receive `&dyn Entity` and downcast through [`Entity::as_any`]
/// to the concrete type they own.
pub trait Entity: Any + Send + Sync {
    /// The kind this entity belongs to.
    fn kind(&self) -> EntityKind;

    /// Upcast for typed downcasting.
    fn as_any(&self) -> &dyn Any;
}
