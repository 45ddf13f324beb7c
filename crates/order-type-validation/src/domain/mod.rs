//! # Domain Layer
//!
//! Order-type entities, identifiers and hierarchy walks.
//!
//! This module contains NO I/O dependencies. Persisted data reaches the
//! validator only through the ports in the `ports` module.

pub mod entities;
pub mod hierarchy;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
