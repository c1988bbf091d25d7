//! Settings

mod repository;

pub use repository::*;
