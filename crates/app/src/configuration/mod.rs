//! Requirement Configuration
//!
//! Everything the admin configuration page needs: loading and saving a
//! requirement's product list, the product picker, and the product names shown
//! next to the list.

pub mod errors;
pub mod models;
pub mod service;
pub mod urls;

pub use errors::ConfigurationError;
pub use service::*;
