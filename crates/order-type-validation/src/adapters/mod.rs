//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits.

mod in_memory;

pub use in_memory::InMemoryOrderTypeStore;
