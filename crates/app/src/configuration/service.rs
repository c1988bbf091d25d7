//! Configuration service.

use std::sync::Arc;

use async_trait::async_trait;
use has_one_product::prelude::{
    DiscountId, RULE_SYSTEM_NAME, RequirementId, RuleSpecification, friendly_name_ids,
    settings_key,
};
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{error, info, warn};

use crate::{
    configuration::{
        errors::ConfigurationError,
        models::{
            ConfigurationUpdate, RequirementConfiguration, SavedConfiguration,
        },
    },
    domain::{
        RepositoryError,
        discounts::{
            DiscountsRepository,
            models::{DiscountRequirement, NewDiscountRequirement},
        },
        products::{
            ProductsRepository,
            models::{ProductPage, ProductSearch},
        },
        settings::SettingsStore,
    },
};

#[derive(Clone)]
pub struct HasOneProductConfiguration {
    settings: Arc<dyn SettingsStore>,
    discounts: Arc<dyn DiscountsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl HasOneProductConfiguration {
    #[must_use]
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        discounts: Arc<dyn DiscountsRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self {
            settings,
            discounts,
            products,
        }
    }

    async fn ensure_discount(&self, discount: DiscountId) -> Result<(), ConfigurationError> {
        match self.discounts.get_discount(discount).await {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound) => Err(ConfigurationError::DiscountNotFound(discount)),
            Err(error) => Err(error.into()),
        }
    }

    async fn discard_requirement(&self, requirement: RequirementId) {
        match self.discounts.delete_requirement(requirement).await {
            Ok(_) => warn!(%requirement, "removed requirement after its settings failed to save"),
            Err(error) => error!(
                %requirement,
                "failed to remove requirement after its settings failed to save: {error}"
            ),
        }
    }

    /// The requirement, when it exists, belongs to `discount` and is evaluated
    /// by this rule.
    async fn find_requirement(
        &self,
        discount: DiscountId,
        requirement: RequirementId,
    ) -> Result<Option<DiscountRequirement>, ConfigurationError> {
        match self.discounts.get_requirement(requirement).await {
            Ok(found) if found.discount == discount && found.system_name == RULE_SYSTEM_NAME => {
                Ok(Some(found))
            }
            Ok(_) | Err(RepositoryError::NotFound) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl ConfigurationService for HasOneProductConfiguration {
    async fn get_configuration(
        &self,
        discount: DiscountId,
        requirement: Option<RequirementId>,
    ) -> Result<RequirementConfiguration, ConfigurationError> {
        self.ensure_discount(discount).await?;

        let Some(requirement) = requirement else {
            return Ok(RequirementConfiguration {
                discount,
                requirement: None,
                product_ids: String::new(),
            });
        };

        if self.find_requirement(discount, requirement).await?.is_none() {
            return Err(ConfigurationError::RequirementNotFound(requirement));
        }

        let product_ids = self
            .settings
            .get_setting(&settings_key(requirement))
            .await?
            .unwrap_or_default();

        Ok(RequirementConfiguration {
            discount,
            requirement: Some(requirement),
            product_ids,
        })
    }

    #[tracing::instrument(
        name = "configuration.save",
        skip(self, update),
        fields(discount = %update.discount, requirement = tracing::field::Empty),
        err
    )]
    async fn save_configuration(
        &self,
        update: ConfigurationUpdate,
    ) -> Result<SavedConfiguration, ConfigurationError> {
        self.ensure_discount(update.discount).await?;

        let existing = match update.requirement {
            Some(requirement) => self.find_requirement(update.discount, requirement).await?,
            None => None,
        };

        let (requirement, created) = match existing {
            Some(existing) => (existing.id, false),
            None => {
                let created = self
                    .discounts
                    .create_requirement(NewDiscountRequirement {
                        discount: update.discount,
                        system_name: RULE_SYSTEM_NAME.to_owned(),
                    })
                    .await?;

                (created.id, true)
            }
        };

        tracing::Span::current().record("requirement", tracing::field::display(requirement));

        if let Err(error) = self
            .settings
            .set_setting(&settings_key(requirement), &update.product_ids)
            .await
        {
            // A requirement without stored products would admit every cart.
            if created {
                self.discard_requirement(requirement).await;
            }

            return Err(error.into());
        }

        let warnings = RuleSpecification::parse(&update.product_ids).warnings();

        for warning in &warnings {
            warn!(%requirement, "saved malformed product entry: {warning}");
        }

        info!(%requirement, created, "saved requirement configuration");

        Ok(SavedConfiguration {
            requirement,
            created,
            warnings,
        })
    }

    async fn product_friendly_names(&self, text: &str) -> Result<String, ConfigurationError> {
        let ids = friendly_name_ids(text);

        if ids.is_empty() {
            return Ok(String::new());
        }

        let products = self.products.get_products_by_ids(&ids).await?;

        let names: FxHashMap<_, _> = products
            .iter()
            .map(|product| (product.id, product.name.as_str()))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| names.get(id).copied())
            .collect::<Vec<_>>()
            .join(", "))
    }

    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<ProductPage, ConfigurationError> {
        Ok(self.products.search_products(search.normalised()).await?)
    }

    async fn delete_requirement_settings(
        &self,
        requirement: RequirementId,
    ) -> Result<(), ConfigurationError> {
        let deleted = self.settings.delete_setting(&settings_key(requirement)).await?;

        info!(%requirement, deleted, "removed requirement settings");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Load the configuration page of a discount's requirement.
    async fn get_configuration(
        &self,
        discount: DiscountId,
        requirement: Option<RequirementId>,
    ) -> Result<RequirementConfiguration, ConfigurationError>;

    /// Store a requirement's product list, creating the requirement if needed.
    async fn save_configuration(
        &self,
        update: ConfigurationUpdate,
    ) -> Result<SavedConfiguration, ConfigurationError>;

    /// Names of the products mentioned in a specification, joined by `", "`.
    async fn product_friendly_names(&self, text: &str) -> Result<String, ConfigurationError>;

    /// One page of the product picker.
    async fn search_products(&self, search: ProductSearch)
    -> Result<ProductPage, ConfigurationError>;

    /// Forget the product list of a deleted requirement.
    async fn delete_requirement_settings(
        &self,
        requirement: RequirementId,
    ) -> Result<(), ConfigurationError>;
}
