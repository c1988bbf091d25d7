//! Errors

use salvo::http::StatusError;
use tracing::error;

use has_one_product_app::configuration::ConfigurationError;

pub(crate) fn into_status_error(error: ConfigurationError) -> StatusError {
    match error {
        ConfigurationError::DiscountNotFound(discount) => {
            StatusError::not_found().brief(format!("Discount {discount} not found"))
        }
        ConfigurationError::RequirementNotFound(requirement) => {
            StatusError::not_found().brief(format!("Requirement {requirement} not found"))
        }
        ConfigurationError::Storage(source) => {
            error!("failed to access requirement configuration: {source}");

            StatusError::internal_server_error()
        }
    }
}
