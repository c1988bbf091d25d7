//! Uninstall Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, plugin::errors::into_status_error};

/// Uninstalled Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UninstalledResponse {
    /// Requirements evaluated by this rule that were deleted
    pub requirements_removed: u64,

    /// Product lists deleted with them
    pub settings_removed: u64,

    /// Display strings deleted
    pub resources_removed: u64,
}

/// Uninstall Handler
///
/// Deletes every requirement the rule evaluates, their product lists and the
/// rule's display strings.
#[endpoint(
    tags("plugin"),
    summary = "Uninstall Rule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rule uninstalled"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "plugin.uninstall", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UninstalledResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let report = state
        .app
        .lifecycle
        .uninstall()
        .await
        .map_err(into_status_error)?;

    Ok(Json(UninstalledResponse {
        requirements_removed: report.requirements_removed,
        settings_removed: report.settings_removed,
        resources_removed: report.resources_removed,
    }))
}
