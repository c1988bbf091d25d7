//! Locale Resources Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, query};

use crate::domain::errors::RepositoryError;

const UPSERT_RESOURCE_SQL: &str = "\
    INSERT INTO locale_string_resources (name, value) VALUES ($1, $2) \
    ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value";

const DELETE_RESOURCES_SQL: &str =
    "DELETE FROM locale_string_resources WHERE starts_with(name, $1)";

#[derive(Debug, Clone)]
pub struct PgLocaleResourcesRepository {
    pool: PgPool,
}

impl PgLocaleResourcesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocaleResourcesRepository for PgLocaleResourcesRepository {
    async fn upsert_resource(&self, name: &str, value: &str) -> Result<(), RepositoryError> {
        query(UPSERT_RESOURCE_SQL)
            .bind(name)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_resources(&self, prefix: &str) -> Result<u64, RepositoryError> {
        let rows_affected = query(DELETE_RESOURCES_SQL)
            .bind(prefix)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait LocaleResourcesRepository: Send + Sync {
    /// Create or replace a display string.
    async fn upsert_resource(&self, name: &str, value: &str) -> Result<(), RepositoryError>;

    /// Delete every display string whose name starts with `prefix`.
    async fn delete_resources(&self, prefix: &str) -> Result<u64, RepositoryError>;
}
