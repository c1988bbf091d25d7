//! Check Requirement Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use has_one_product::prelude::{CustomerId, RequirementId, StoreId};
use has_one_product_app::rule::models::RequirementRequest;

use crate::{
    extensions::*,
    observability::{CheckOutcome, observe_requirement_check},
};

/// Check Requirement Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckRequirementRequest {
    /// Customer whose cart is checked; absent for anonymous requests
    pub customer: Option<i64>,

    /// Store the cart belongs to
    pub store: i64,
}

/// Check Requirement Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckRequirementResponse {
    /// Whether the cart satisfies the requirement
    pub is_valid: bool,
}

/// Check Requirement Handler
///
/// Called by the discount engine to decide whether a discount applies.
#[endpoint(
    tags("requirements"),
    summary = "Check Requirement",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Requirement checked"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "requirements.check",
    skip(requirement, json, depot),
    fields(requirement_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    requirement: PathParam<i64>,
    json: JsonBody<CheckRequirementRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckRequirementResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let requirement = requirement.into_inner();
    let request = json.into_inner();

    tracing::Span::current().record("requirement_id", requirement);

    let check = state
        .app
        .rule
        .check_requirement(RequirementRequest {
            requirement: RequirementId::new(requirement),
            customer: request.customer.map(CustomerId::new),
            store: StoreId::new(request.store),
        })
        .await
        .inspect_err(|_| observe_requirement_check(CheckOutcome::Error))
        .or_500("failed to check requirement")?;

    observe_requirement_check(if check.is_valid {
        CheckOutcome::Valid
    } else {
        CheckOutcome::Invalid
    });

    Ok(Json(CheckRequirementResponse {
        is_valid: check.is_valid,
    }))
}
