//! Get Configuration Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use has_one_product::prelude::{DiscountId, RequirementId, RuleSpecification};
use has_one_product_app::configuration::{
    models::RequirementConfiguration, urls::configuration_url,
};

use crate::{configuration::errors::into_status_error, extensions::*};

/// Configuration Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfigurationResponse {
    /// Discount the requirement belongs to
    pub discount: i64,

    /// Requirement being configured, absent for a new requirement
    pub requirement: Option<i64>,

    /// Stored product list, verbatim
    pub product_ids: String,

    /// Link back to this configuration page
    pub configuration_url: String,

    /// Problems found in the stored product list
    pub warnings: Vec<String>,
}

/// Get Configuration Handler
///
/// Returns the stored product list of a discount's requirement.
#[endpoint(
    tags("configuration"),
    summary = "Get Requirement Configuration",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Configuration found"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount or requirement not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    discount: PathParam<i64>,
    requirement: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<ConfigurationResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let discount = DiscountId::new(discount.into_inner());
    let requirement = requirement.into_inner().map(RequirementId::new);

    let configuration = state
        .app
        .configuration
        .get_configuration(discount, requirement)
        .await
        .map_err(into_status_error)?;

    let RequirementConfiguration {
        discount,
        requirement,
        product_ids,
    } = configuration;

    let warnings = RuleSpecification::parse(&product_ids)
        .warnings()
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(Json(ConfigurationResponse {
        discount: discount.into_inner(),
        requirement: requirement.map(RequirementId::into_inner),
        configuration_url: configuration_url(&state.links, discount, requirement),
        product_ids,
        warnings,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use has_one_product_app::configuration::{ConfigurationError, MockConfigurationService};

    use crate::test_helpers::configuration_service;

    use super::*;

    fn make_service(configuration: MockConfigurationService) -> Service {
        configuration_service(
            configuration,
            Router::with_path("discounts/{discount}/requirements/configure").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_configuration_returns_stored_text() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_get_configuration()
            .once()
            .withf(|discount, requirement| {
                *discount == DiscountId::new(4) && *requirement == Some(RequirementId::new(9))
            })
            .return_once(|discount, requirement| {
                Ok(RequirementConfiguration {
                    discount,
                    requirement,
                    product_ids: "77, 78:abc".to_owned(),
                })
            });

        let mut res =
            TestClient::get("http://example.com/discounts/4/requirements/configure?requirement=9")
                .send(&make_service(configuration))
                .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ConfigurationResponse = res.take_json().await?;

        assert_eq!(body.discount, 4);
        assert_eq!(body.requirement, Some(9));
        assert_eq!(body.product_ids, "77, 78:abc");
        assert_eq!(
            body.configuration_url,
            "/admin/discounts/4/requirements/configure?requirement=9"
        );
        assert_eq!(body.warnings.len(), 1, "expected one warning for 78:abc");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_configuration_without_requirement() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_get_configuration()
            .once()
            .withf(|_, requirement| requirement.is_none())
            .return_once(|discount, _| {
                Ok(RequirementConfiguration {
                    discount,
                    requirement: None,
                    product_ids: String::new(),
                })
            });

        let body: ConfigurationResponse =
            TestClient::get("http://example.com/discounts/4/requirements/configure")
                .send(&make_service(configuration))
                .await
                .take_json()
                .await?;

        assert_eq!(body.requirement, None);
        assert_eq!(
            body.configuration_url,
            "/admin/discounts/4/requirements/configure"
        );
        assert!(body.warnings.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_configuration_unknown_discount_returns_404() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_get_configuration()
            .once()
            .return_once(|discount, _| Err(ConfigurationError::DiscountNotFound(discount)));

        let res = TestClient::get("http://example.com/discounts/4/requirements/configure")
            .send(&make_service(configuration))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_configuration_invalid_discount_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/discounts/abc/requirements/configure")
            .send(&make_service(MockConfigurationService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
