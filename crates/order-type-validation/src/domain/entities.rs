//! # Domain Entities
//!
//! The order-type taxonomy node and the concept-class tags attached to it.

use super::value_objects::{ConceptClassId, OrderTypeId};
use serde::{Deserialize, Serialize};
use shared_types::{Entity, EntityKind};
use std::any::Any;
use uuid::Uuid;

/// Classification tag; a tag may belong to at most one order type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptClass {
    pub id: ConceptClassId,
    pub name: String,
}

impl ConceptClass {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ConceptClassId(id),
            name: name.into(),
        }
    }
}

impl Entity for ConceptClass {
    fn kind(&self) -> EntityKind {
        EntityKind::ConceptClass
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A node of the order-type tree.
///
/// `id` is `None` until the node has been persisted. Identity questions
/// ("is this the node being edited?") compare `id`s, never field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderType {
    /// Persisted primary key.
    pub id: Option<OrderTypeId>,
    /// External identifier, stable across services.
    pub uuid: Uuid,
    /// Unique, human-readable name.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Implementation class the platform instantiates for orders of this type.
    pub java_class_name: Option<String>,
    /// Parent node; the hierarchy must stay acyclic.
    pub parent: Option<OrderTypeId>,
    /// Tags owned by this node, in submitted order.
    pub concept_classes: Vec<ConceptClass>,
    /// Soft-deleted.
    pub retired: bool,
}

impl OrderType {
    /// A new, unsaved order type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            uuid: Uuid::new_v4(),
            name: Some(name.into()),
            description: None,
            java_class_name: None,
            parent: None,
            concept_classes: Vec::new(),
            retired: false,
        }
    }

    /// Builder: set the persisted id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(OrderTypeId(id));
        self
    }

    /// Builder: set the parent.
    pub fn with_parent(mut self, parent: OrderTypeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: set the concept classes.
    pub fn with_concept_classes(mut self, classes: Vec<ConceptClass>) -> Self {
        self.concept_classes = classes;
        self
    }

    /// Builder: mark as retired.
    pub fn retired(mut self) -> Self {
        self.retired = true;
        self
    }

    /// Whether `self` and `other` are the same persisted record.
    ///
    /// Unsaved nodes are never the same entity as anything.
    pub fn is_same_entity(&self, other: &OrderType) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    /// Whether the name is present and not whitespace-only.
    pub fn has_name_text(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Position of `class` in this node's tag list.
    pub fn concept_class_index(&self, class: &ConceptClass) -> Option<usize> {
        self.concept_classes.iter().position(|c| c.id == class.id)
    }

    /// Name for messages; empty when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Entity for OrderType {
    fn kind(&self) -> EntityKind {
        EntityKind::OrderType
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
