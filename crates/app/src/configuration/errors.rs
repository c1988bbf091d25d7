//! Configuration service errors.

use has_one_product::prelude::{DiscountId, RequirementId};
use thiserror::Error;

use crate::domain::RepositoryError;

/// Errors returned by the configuration service.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The discount does not exist.
    #[error("discount {0} could not be loaded")]
    DiscountNotFound(DiscountId),

    /// The requirement does not exist, belongs to another discount or is
    /// evaluated by another rule.
    #[error("requirement {0} could not be loaded")]
    RequirementNotFound(RequirementId),

    /// Host data could not be read or written.
    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for ConfigurationError {
    fn from(error: RepositoryError) -> Self {
        Self::Storage(error)
    }
}
