//! Rule service.

use std::sync::Arc;

use async_trait::async_trait;
use has_one_product::prelude::{CartTotals, RuleSpecification, settings_key};
use mockall::automock;
use tracing::{debug, warn};

use crate::{
    domain::{
        carts::{CartRepository, models::CartType},
        settings::SettingsStore,
    },
    rule::{
        errors::RuleServiceError,
        models::{RequirementCheck, RequirementRequest},
    },
};

/// Evaluates has-one-product requirements against stored specifications and
/// the customer's shopping cart.
#[derive(Clone)]
pub struct HasOneProductRule {
    settings: Arc<dyn SettingsStore>,
    carts: Arc<dyn CartRepository>,
}

impl HasOneProductRule {
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsStore>, carts: Arc<dyn CartRepository>) -> Self {
        Self { settings, carts }
    }
}

#[async_trait]
impl RuleService for HasOneProductRule {
    #[tracing::instrument(
        name = "rule.check_requirement",
        skip(self),
        fields(
            requirement = %request.requirement,
            store = %request.store,
            is_valid = tracing::field::Empty
        ),
        err
    )]
    async fn check_requirement(
        &self,
        request: RequirementRequest,
    ) -> Result<RequirementCheck, RuleServiceError> {
        let text = self
            .settings
            .get_setting(&settings_key(request.requirement))
            .await?
            .unwrap_or_default();

        let specification = RuleSpecification::parse(&text);

        for warning in specification.warnings() {
            warn!(requirement = %request.requirement, "malformed product entry: {warning}");
        }

        let check = if specification.is_unrestricted() {
            RequirementCheck::valid()
        } else if let Some(customer) = request.customer {
            let lines = self
                .carts
                .get_cart_lines(customer, CartType::ShoppingCart, request.store)
                .await?;

            let totals = CartTotals::from_lines(lines);

            debug!(products = totals.len(), "aggregated cart lines");

            RequirementCheck {
                is_valid: specification.matches(&totals),
            }
        } else {
            RequirementCheck::invalid()
        };

        tracing::Span::current().record("is_valid", check.is_valid);

        Ok(check)
    }
}

#[automock]
#[async_trait]
pub trait RuleService: Send + Sync {
    /// Whether the request's cart satisfies the requirement.
    async fn check_requirement(
        &self,
        request: RequirementRequest,
    ) -> Result<RequirementCheck, RuleServiceError>;
}
