//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    configuration::{ConfigurationService, HasOneProductConfiguration},
    database,
    domain::{
        carts::PgCartRepository, discounts::PgDiscountsRepository,
        locales::PgLocaleResourcesRepository, products::PgProductsRepository,
        settings::PgSettingsStore,
    },
    lifecycle::{HasOneProductLifecycle, LifecycleService},
    rule::{HasOneProductRule, RuleService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub rule: Arc<dyn RuleService>,
    pub configuration: Arc<dyn ConfigurationService>,
    pub lifecycle: Arc<dyn LifecycleService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool))
    }

    /// Wire every service to the `PostgreSQL` repositories sharing `pool`.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let settings = Arc::new(PgSettingsStore::new(pool.clone()));
        let discounts = Arc::new(PgDiscountsRepository::new(pool.clone()));

        Self {
            rule: Arc::new(HasOneProductRule::new(
                settings.clone(),
                Arc::new(PgCartRepository::new(pool.clone())),
            )),
            configuration: Arc::new(HasOneProductConfiguration::new(
                settings.clone(),
                discounts.clone(),
                Arc::new(PgProductsRepository::new(pool.clone())),
            )),
            lifecycle: Arc::new(HasOneProductLifecycle::new(
                settings,
                discounts,
                Arc::new(PgLocaleResourcesRepository::new(pool)),
            )),
        }
    }
}
