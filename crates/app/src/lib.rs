//! Rule, configuration and lifecycle services for the has-one-product
//! discount requirement, with `PostgreSQL` implementations of the host
//! collaborators they depend on.

pub mod configuration;
pub mod context;
pub mod database;
pub mod domain;
pub mod lifecycle;
pub mod rule;
