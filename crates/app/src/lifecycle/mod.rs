//! Rule Lifecycle
//!
//! Installing registers the rule's display strings with the host. Uninstalling
//! removes every requirement the rule evaluates, their product lists and the
//! display strings.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::LifecycleError;
pub use service::*;
