//! Value objects for the order-type taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted primary key of an order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderTypeId(pub u64);

impl fmt::Display for OrderTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted primary key of a concept class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptClassId(pub u64);

impl fmt::Display for ConceptClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The data-validity rule a rejection stems from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionCode {
    /// Name absent, empty or whitespace-only.
    MissingName,
    /// Declared parent lies in the node's own subtree.
    ParentAmongDescendants,
    /// Another node already carries this name.
    DuplicateName,
    /// A concept class is already owned by another node.
    DuplicateConceptClass,
}

impl RejectionCode {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::ParentAmongDescendants => "parent_among_descendants",
            Self::DuplicateName => "duplicate_name",
            Self::DuplicateConceptClass => "duplicate_concept_class",
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
