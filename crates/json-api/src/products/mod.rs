//! Product picker and product names.

pub(crate) mod names;
pub(crate) mod search;
