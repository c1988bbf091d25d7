//! Install Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, plugin::errors::into_status_error};

/// Installed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InstalledResponse {
    /// Display strings created or refreshed
    pub resources_installed: usize,
}

/// Install Handler
///
/// Registers the rule's display strings. Running it again refreshes them.
#[endpoint(
    tags("plugin"),
    summary = "Install Rule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rule installed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "plugin.install", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<InstalledResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let report = state
        .app
        .lifecycle
        .install()
        .await
        .map_err(into_status_error)?;

    Ok(Json(InstalledResponse {
        resources_installed: report.resources_installed,
    }))
}
