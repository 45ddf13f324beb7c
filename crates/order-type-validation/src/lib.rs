//! # Order Type Validation
//!
//! Save-time validation for the order-type taxonomy: a tree of named nodes,
//! each owning a set of concept-class tags.
//!
//! ## Invariants Checked
//!
//! | Rule | Field | Short-circuits |
//! |------|-------|----------------|
//! | Name present, not whitespace-only | `name` | yes |
//! | Parent not among own descendants (or self) | `parent` | no |
//! | Name unique across order types | `name` | no |
//! | Concept class owned by at most one order type, retired included | `conceptClasses[i]` | no |
//!
//! ## Architecture
//!
//! - **Domain** (`domain/`): `OrderType`, `ConceptClass`, ids, hierarchy walks
//! - **Ports** (`ports/`): Inbound `OrderTypeValidationApi`; outbound
//!   `OrderTypeLookup` and `OrderTypeHierarchy`
//! - **Adapters** (`adapters/`): `InMemoryOrderTypeStore`
//! - **Service** (`service.rs`): `OrderTypeValidator`, also registered with
//!   `shared_types::ValidatorRegistry` under `EntityKind::OrderType`
//!
//! The validator only reads. Races between this check and the eventual
//! commit are settled by the persistence layer's own constraints.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::InMemoryOrderTypeStore;
pub use config::{MessageCodes, ValidationConfig};
pub use domain::{ConceptClass, ConceptClassId, OrderType, OrderTypeId, RejectionCode};
pub use ports::{LookupError, OrderTypeHierarchy, OrderTypeLookup, OrderTypeValidationApi};
pub use service::OrderTypeValidator;
