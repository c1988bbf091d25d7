//! Locale Resources

mod repository;
pub mod resources;

pub use repository::*;
