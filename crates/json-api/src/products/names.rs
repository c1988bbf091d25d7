//! Product Names Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{configuration::errors::into_status_error, extensions::*};

/// Product Names Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductNamesResponse {
    /// Names of the listed products, comma separated, in list order
    pub names: String,
}

/// Product Names Handler
///
/// Resolves the products mentioned in a product list to their names.
#[endpoint(
    tags("products"),
    summary = "Product Friendly Names",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Names resolved"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    ids: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductNamesResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let names = state
        .app
        .configuration
        .product_friendly_names(&ids.into_inner().unwrap_or_default())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductNamesResponse { names }))
}
