//! Requirement checks and requirement lifecycle hooks.

pub(crate) mod check;
pub(crate) mod delete_settings;
