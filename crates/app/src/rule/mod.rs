//! Requirement Rule
//!
//! Called by the host's discount engine whenever it needs to know whether a
//! customer's cart satisfies a has-one-product requirement.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::RuleServiceError;
pub use service::*;
