//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    auth, configuration, healthcheck,
    observability::{metrics_handler, request_logging},
    plugin, products, requirements,
    state::State,
};

/// Every route, with the shared middleware stack.
pub(crate) fn service_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(app_router())
}

/// Routes that require the admin token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("discounts/{discount}/requirements/configure")
                .get(configuration::get::handler)
                .post(configuration::save::handler),
        )
        .push(
            Router::with_path("products")
                .push(Router::with_path("names").get(products::names::handler))
                .push(Router::with_path("search").get(products::search::handler)),
        )
        .push(
            Router::with_path("requirements/{requirement}")
                .push(Router::with_path("check").post(requirements::check::handler))
                .push(Router::with_path("settings").delete(requirements::delete_settings::handler)),
        )
        .push(
            Router::with_path("plugin")
                .push(Router::with_path("install").post(plugin::install::handler))
                .push(Router::with_path("uninstall").post(plugin::uninstall::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{http::header::AUTHORIZATION, test::TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN_TOKEN, strict_state};

    use super::*;

    fn make_service() -> Service {
        Service::new(service_router(strict_state()))
    }

    #[tokio::test]
    async fn test_healthcheck_needs_no_token() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_metrics_needs_no_token() -> TestResult {
        let res = TestClient::get("http://example.com/metrics")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_routes_require_token() -> TestResult {
        let service = make_service();

        for res in [
            TestClient::get("http://example.com/discounts/4/requirements/configure")
                .send(&service)
                .await,
            TestClient::get("http://example.com/products/search")
                .send(&service)
                .await,
            TestClient::post("http://example.com/requirements/9/check")
                .json(&json!({ "store": 1 }))
                .send(&service)
                .await,
            TestClient::delete("http://example.com/requirements/9/settings")
                .send(&service)
                .await,
            TestClient::post("http://example.com/plugin/uninstall")
                .send(&service)
                .await,
        ] {
            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_with_token_returns_404() -> TestResult {
        let res = TestClient::get("http://example.com/discounts")
            .add_header(AUTHORIZATION, format!("Bearer {TEST_ADMIN_TOKEN}"), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
