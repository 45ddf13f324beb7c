//! # Outbound Ports (Driven Ports / SPI)
//!
//! Read-only capabilities the validator needs from the persistence layer.
//! Narrow on purpose so tests can supply in-memory fakes.

use crate::domain::{OrderType, OrderTypeId};
use shared_types::ValidationFault;
use thiserror::Error;

/// Error from a persistence-side lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The backing store cannot be reached.
    #[error("Order type store unavailable: {0}")]
    Unavailable(String),

    /// Stored data could not be read back.
    #[error("Corrupt order type data: {0}")]
    Corrupt(String),
}

impl From<LookupError> for ValidationFault {
    fn from(err: LookupError) -> Self {
        ValidationFault::Lookup(err.to_string())
    }
}

/// Query access to persisted order types.
pub trait OrderTypeLookup: Send + Sync {
    /// Find the persisted order type with exactly this name.
    fn find_order_type_by_name(&self, name: &str) -> Result<Option<OrderType>, LookupError>;

    /// List persisted order types, retired ones only when `include_retired`.
    fn list_order_types(&self, include_retired: bool) -> Result<Vec<OrderType>, LookupError>;
}

/// Ancestry questions over the persisted hierarchy.
pub trait OrderTypeHierarchy: Send + Sync {
    /// Whether `other` is `candidate` itself or lies in `candidate`'s subtree.
    ///
    /// An unsaved `candidate` has no persisted subtree.
    fn is_ancestor_or_self(
        &self,
        candidate: &OrderType,
        other: OrderTypeId,
    ) -> Result<bool, LookupError>;
}

impl<T: OrderTypeLookup + ?Sized> OrderTypeLookup for std::sync::Arc<T> {
    fn find_order_type_by_name(&self, name: &str) -> Result<Option<OrderType>, LookupError> {
        (**self).find_order_type_by_name(name)
    }

    fn list_order_types(&self, include_retired: bool) -> Result<Vec<OrderType>, LookupError> {
        (**self).list_order_types(include_retired)
    }
}

impl<T: OrderTypeHierarchy + ?Sized> OrderTypeHierarchy for std::sync::Arc<T> {
    fn is_ancestor_or_self(
        &self,
        candidate: &OrderType,
        other: OrderTypeId,
    ) -> Result<bool, LookupError> {
        (**self).is_ancestor_or_self(candidate, other)
    }
}

/// Mock implementations for testing
#[cfg(test)]
pub mod mocks {
    use super::*;

    /// Lookup over a fixed population.
    pub struct FixedLookup(pub Vec<OrderType>);

    impl OrderTypeLookup for FixedLookup {
        fn find_order_type_by_name(&self, name: &str) -> Result<Option<OrderType>, LookupError> {
            Ok(self
                .0
                .iter()
                .find(|n| n.name.as_deref() == Some(name))
                .cloned())
        }

        fn list_order_types(&self, include_retired: bool) -> Result<Vec<OrderType>, LookupError> {
            Ok(self
                .0
                .iter()
                .filter(|n| include_retired || !n.retired)
                .cloned()
                .collect())
        }
    }

    /// Hierarchy that answers with a fixed verdict.
    pub struct FixedHierarchy(pub bool);

    impl OrderTypeHierarchy for FixedHierarchy {
        fn is_ancestor_or_self(
            &self,
            _candidate: &OrderType,
            _other: OrderTypeId,
        ) -> Result<bool, LookupError> {
            Ok(self.0)
        }
    }

    /// Lookup whose store is down.
    pub struct UnavailableLookup;

    impl OrderTypeLookup for UnavailableLookup {
        fn find_order_type_by_name(&self, _name: &str) -> Result<Option<OrderType>, LookupError> {
            Err(LookupError::Unavailable("connection refused".into()))
        }

        fn list_order_types(&self, _include_retired: bool) -> Result<Vec<OrderType>, LookupError> {
            Err(LookupError::Unavailable("connection refused".into()))
        }
    }

    /// Lookup that answers name queries but fails to list the population.
    pub struct ListingUnavailableLookup;

    impl OrderTypeLookup for ListingUnavailableLookup {
        fn find_order_type_by_name(&self, _name: &str) -> Result<Option<OrderType>, LookupError> {
            Ok(None)
        }

        fn list_order_types(&self, _include_retired: bool) -> Result<Vec<OrderType>, LookupError> {
            Err(LookupError::Unavailable("scan timed out".into()))
        }
    }
}
