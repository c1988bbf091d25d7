//! Test helpers.

use std::sync::Arc;

use has_one_product_app::{
    configuration::{MockConfigurationService, urls::RequestContext},
    context::AppContext,
    lifecycle::MockLifecycleService,
    rule::MockRuleService,
};
use salvo::{affix_state::inject, prelude::*};

use crate::{auth::AdminToken, state::State};

pub(crate) const TEST_ADMIN_TOKEN: &str = "test-admin-token";
pub(crate) const TEST_BASE_PATH: &str = "/admin";

pub(crate) fn strict_rule_mock() -> MockRuleService {
    let mut rule = MockRuleService::new();

    rule.expect_check_requirement().never();

    rule
}

pub(crate) fn strict_configuration_mock() -> MockConfigurationService {
    let mut configuration = MockConfigurationService::new();

    configuration.expect_get_configuration().never();
    configuration.expect_save_configuration().never();
    configuration.expect_product_friendly_names().never();
    configuration.expect_search_products().never();
    configuration.expect_delete_requirement_settings().never();

    configuration
}

pub(crate) fn strict_lifecycle_mock() -> MockLifecycleService {
    let mut lifecycle = MockLifecycleService::new();

    lifecycle.expect_install().never();
    lifecycle.expect_uninstall().never();

    lifecycle
}

fn make_state(
    rule: MockRuleService,
    configuration: MockConfigurationService,
    lifecycle: MockLifecycleService,
) -> Arc<State> {
    State::shared(
        AppContext {
            rule: Arc::new(rule),
            configuration: Arc::new(configuration),
            lifecycle: Arc::new(lifecycle),
        },
        AdminToken::new(TEST_ADMIN_TOKEN),
        RequestContext::new(TEST_BASE_PATH),
    )
}

pub(crate) fn strict_state() -> Arc<State> {
    make_state(
        strict_rule_mock(),
        strict_configuration_mock(),
        strict_lifecycle_mock(),
    )
}

pub(crate) fn rule_service(rule: MockRuleService, route: Router) -> Service {
    make_service(
        make_state(rule, strict_configuration_mock(), strict_lifecycle_mock()),
        route,
    )
}

pub(crate) fn configuration_service(
    configuration: MockConfigurationService,
    route: Router,
) -> Service {
    make_service(
        make_state(strict_rule_mock(), configuration, strict_lifecycle_mock()),
        route,
    )
}

pub(crate) fn lifecycle_service(lifecycle: MockLifecycleService, route: Router) -> Service {
    make_service(
        make_state(strict_rule_mock(), strict_configuration_mock(), lifecycle),
        route,
    )
}

fn make_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
