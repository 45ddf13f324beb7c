//! # EMR Validation Core Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── registry_dispatch.rs     # Save-time hook through ValidatorRegistry
//!     └── concurrent_validation.rs # One validator shared across threads
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p emr-tests
//! cargo test -p emr-tests integration::registry_dispatch
//! ```

pub mod integration;
