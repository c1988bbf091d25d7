//! Errors

use salvo::http::StatusError;
use tracing::error;

use has_one_product_app::lifecycle::LifecycleError;

pub(super) fn into_status_error(error: LifecycleError) -> StatusError {
    match error {
        LifecycleError::Storage(source) => {
            error!("failed to update host data: {source}");

            StatusError::internal_server_error()
        }
    }
}
