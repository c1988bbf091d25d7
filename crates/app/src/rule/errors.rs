//! Rule service errors.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors returned while checking a requirement.
#[derive(Debug, Error)]
pub enum RuleServiceError {
    /// Settings or cart lines could not be read.
    #[error("failed to load requirement data")]
    Storage(#[from] RepositoryError),
}
