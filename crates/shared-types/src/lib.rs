//! # Shared Types Crate
//!
//! Validation contracts shared by every entity subsystem of the EMR core.
//!
//! ## Design Principles
//!
//! - **Two error tiers**: caller misuse and collaborator failures are
//!   `ValidationFault`s; invalid data is a list of `FieldRejection`s.
//! - **Field addressing**: every rejection names the field, and the element
//!   index for collection fields, so a form layer can place it.
//! - **Explicit dispatch**: validators are routed by `EntityKind` through the
//!   `ValidatorRegistry`, resolved at startup.

pub mod entities;
pub mod errors;
pub mod rejection;
pub mod validator_registry;
pub mod validator_trait;

pub use entities::{Entity, EntityKind};
pub use errors::{ValidationError, ValidationFault};
pub use rejection::{FieldPath, FieldRejection, RejectionSink, ValidationErrors};
pub use validator_registry::ValidatorRegistry;
pub use validator_trait::{downcast_target, DynValidator, Validator};
