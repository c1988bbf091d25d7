//! Discounts Repository

use async_trait::async_trait;
use has_one_product::prelude::{DiscountId, RequirementId};
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    discounts::models::{Discount, DiscountRequirement, NewDiscountRequirement},
    errors::RepositoryError,
};

const GET_DISCOUNT_SQL: &str = "SELECT id, name FROM discounts WHERE id = $1";

const GET_REQUIREMENT_SQL: &str =
    "SELECT id, discount_id, system_name FROM discount_requirements WHERE id = $1";

const CREATE_REQUIREMENT_SQL: &str = "\
    INSERT INTO discount_requirements (discount_id, system_name) VALUES ($1, $2) \
    RETURNING id, discount_id, system_name";

const LIST_REQUIREMENTS_BY_SYSTEM_NAME_SQL: &str = "\
    SELECT id, discount_id, system_name FROM discount_requirements \
    WHERE system_name = $1 ORDER BY id";

const DELETE_REQUIREMENT_SQL: &str = "DELETE FROM discount_requirements WHERE id = $1";

#[derive(Debug, Clone)]
pub struct PgDiscountsRepository {
    pool: PgPool,
}

impl PgDiscountsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Discount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: DiscountId::new(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for DiscountRequirement {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RequirementId::new(row.try_get("id")?),
            discount: DiscountId::new(row.try_get("discount_id")?),
            system_name: row.try_get("system_name")?,
        })
    }
}

#[async_trait]
impl DiscountsRepository for PgDiscountsRepository {
    async fn get_discount(&self, discount: DiscountId) -> Result<Discount, RepositoryError> {
        query_as::<Postgres, Discount>(GET_DISCOUNT_SQL)
            .bind(discount.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_requirement(
        &self,
        requirement: RequirementId,
    ) -> Result<DiscountRequirement, RepositoryError> {
        query_as::<Postgres, DiscountRequirement>(GET_REQUIREMENT_SQL)
            .bind(requirement.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_requirement(
        &self,
        requirement: NewDiscountRequirement,
    ) -> Result<DiscountRequirement, RepositoryError> {
        query_as::<Postgres, DiscountRequirement>(CREATE_REQUIREMENT_SQL)
            .bind(requirement.discount.into_inner())
            .bind(requirement.system_name)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_requirements_by_system_name(
        &self,
        system_name: &str,
    ) -> Result<Vec<DiscountRequirement>, RepositoryError> {
        query_as::<Postgres, DiscountRequirement>(LIST_REQUIREMENTS_BY_SYSTEM_NAME_SQL)
            .bind(system_name)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_requirement(&self, requirement: RequirementId) -> Result<u64, RepositoryError> {
        let rows_affected = query(DELETE_REQUIREMENT_SQL)
            .bind(requirement.into_inner())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait DiscountsRepository: Send + Sync {
    /// Retrieve a single discount.
    async fn get_discount(&self, discount: DiscountId) -> Result<Discount, RepositoryError>;

    /// Retrieve a single discount requirement.
    async fn get_requirement(
        &self,
        requirement: RequirementId,
    ) -> Result<DiscountRequirement, RepositoryError>;

    /// Attach a new requirement to a discount.
    async fn create_requirement(
        &self,
        requirement: NewDiscountRequirement,
    ) -> Result<DiscountRequirement, RepositoryError>;

    /// All requirements evaluated by the rule named `system_name`.
    async fn list_requirements_by_system_name(
        &self,
        system_name: &str,
    ) -> Result<Vec<DiscountRequirement>, RepositoryError>;

    /// Delete a requirement, returning the number of rows deleted.
    async fn delete_requirement(&self, requirement: RequirementId) -> Result<u64, RepositoryError>;
}
