//! Delete Requirement Settings Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use has_one_product::prelude::RequirementId;

use crate::{configuration::errors::into_status_error, extensions::*};

/// Delete Requirement Settings Handler
///
/// Called by the host after it deletes a requirement, so its product list
/// does not outlive it.
#[endpoint(
    tags("requirements"),
    summary = "Delete Requirement Settings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Settings removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "requirements.delete_settings",
    skip(requirement, depot),
    fields(requirement_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    requirement: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let requirement = requirement.into_inner();

    tracing::Span::current().record("requirement_id", requirement);

    state
        .app
        .configuration
        .delete_requirement_settings(RequirementId::new(requirement))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use has_one_product_app::{
        configuration::{ConfigurationError, MockConfigurationService},
        domain::RepositoryError,
    };

    use crate::test_helpers::configuration_service;

    use super::*;

    fn make_service(configuration: MockConfigurationService) -> Service {
        configuration_service(
            configuration,
            Router::with_path("requirements/{requirement}/settings").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_settings_success() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_delete_requirement_settings()
            .once()
            .withf(|requirement| *requirement == RequirementId::new(9))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/requirements/9/settings")
            .send(&make_service(configuration))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_settings_storage_error_returns_500() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_delete_requirement_settings()
            .once()
            .return_once(|_| Err(ConfigurationError::Storage(RepositoryError::InvalidData)));

        let res = TestClient::delete("http://example.com/requirements/9/settings")
            .send(&make_service(configuration))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
