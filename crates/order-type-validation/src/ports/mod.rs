//! Ports module for Order Type Validation
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::OrderTypeValidationApi;
pub use outbound::{LookupError, OrderTypeHierarchy, OrderTypeLookup};
