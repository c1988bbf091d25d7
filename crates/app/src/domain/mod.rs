//! Host Collaborators
//!
//! The services only see these traits. Each has a `PostgreSQL` implementation
//! over the host tables and an `automock` mock for tests.

pub mod carts;
pub mod discounts;
pub mod errors;
pub mod locales;
pub mod products;
pub mod settings;

pub use errors::RepositoryError;
