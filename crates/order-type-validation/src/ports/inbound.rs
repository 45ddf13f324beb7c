//! Inbound Ports (Driving Ports / API)

use crate::domain::OrderType;
use shared_types::{RejectionSink, ValidationFault};

/// Typed entry point for order-type validation.
///
/// The registry reaches the same rules through `shared_types::Validator`;
/// this trait is for callers that already hold an `OrderType`.
pub trait OrderTypeValidationApi: Send + Sync {
    /// Check `order_type` against the persisted population.
    ///
    /// Rejections go to `errors`; `Err` means validation could not run.
    fn validate_order_type(
        &self,
        order_type: &OrderType,
        errors: &mut dyn RejectionSink,
    ) -> Result<(), ValidationFault>;
}
