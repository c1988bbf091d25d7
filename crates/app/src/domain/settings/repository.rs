//! Settings Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, query, query_scalar};

use crate::domain::errors::RepositoryError;

const GET_SETTING_SQL: &str = "SELECT value FROM settings WHERE name = $1";

const SET_SETTING_SQL: &str = "\
    INSERT INTO settings (name, value) VALUES ($1, $2) \
    ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value";

const DELETE_SETTING_SQL: &str = "DELETE FROM settings WHERE name = $1";

/// Host key/value settings store.
#[derive(Debug, Clone)]
pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get_setting(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        query_scalar::<_, String>(GET_SETTING_SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        query(SET_SETTING_SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_setting(&self, key: &str) -> Result<u64, RepositoryError> {
        let rows_affected = query(DELETE_SETTING_SQL)
            .bind(key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Value stored under `key`, if any.
    async fn get_setting(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Remove `key`, returning the number of rows deleted.
    async fn delete_setting(&self, key: &str) -> Result<u64, RepositoryError>;
}
