//! Cross-crate integration flows.

pub mod concurrent_validation;
pub mod registry_dispatch;
