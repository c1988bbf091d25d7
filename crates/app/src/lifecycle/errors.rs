//! Lifecycle service errors.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors returned while installing or uninstalling the rule.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to update host data")]
    Storage(#[from] RepositoryError),
}
