//! Save Configuration Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use has_one_product::prelude::{DiscountId, RequirementId};
use has_one_product_app::configuration::{models::ConfigurationUpdate, urls::configuration_url};

use crate::{configuration::errors::into_status_error, extensions::*};

/// Save Configuration Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaveConfigurationRequest {
    /// Requirement to update; a new one is created when absent or unknown
    pub requirement: Option<i64>,

    /// Product list, e.g. "77, 123:2, 156:3-8"
    #[serde(default)]
    pub product_ids: String,
}

/// Configuration Saved Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfigurationSavedResponse {
    /// Requirement the product list was saved to
    pub requirement: i64,

    /// Whether the requirement was created by this save
    pub created: bool,

    /// Link to the configuration page of the saved requirement
    pub configuration_url: String,

    /// Malformed entries in the saved product list
    pub warnings: Vec<String>,
}

/// Save Configuration Handler
///
/// Stores a requirement's product list. Malformed entries are saved as
/// written and reported back as warnings.
#[endpoint(
    tags("configuration"),
    summary = "Save Requirement Configuration",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Configuration saved"),
        (status_code = StatusCode::CREATED, description = "Requirement created"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "configuration.save",
    skip(discount, json, depot, res),
    fields(discount_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    discount: PathParam<i64>,
    json: JsonBody<SaveConfigurationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ConfigurationSavedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let discount = DiscountId::new(discount.into_inner());
    let request = json.into_inner();

    tracing::Span::current().record("discount_id", tracing::field::display(discount));

    let saved = state
        .app
        .configuration
        .save_configuration(ConfigurationUpdate {
            discount,
            requirement: request.requirement.map(RequirementId::new),
            product_ids: request.product_ids,
        })
        .await
        .map_err(into_status_error)?;

    if saved.created {
        res.status_code(StatusCode::CREATED);
    }

    Ok(Json(ConfigurationSavedResponse {
        requirement: saved.requirement.into_inner(),
        created: saved.created,
        configuration_url: configuration_url(&state.links, discount, Some(saved.requirement)),
        warnings: saved.warnings.iter().map(ToString::to_string).collect(),
    }))
}
