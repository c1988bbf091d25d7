//! Products Repository

use async_trait::async_trait;
use has_one_product::prelude::ProductId;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    errors::RepositoryError,
    products::models::{Product, ProductPage, ProductSearch},
};

const GET_PRODUCTS_BY_IDS_SQL: &str = "\
    SELECT id, name, sku, published FROM products \
    WHERE id = ANY($1) AND NOT deleted";

const SEARCH_FILTER_SQL: &str = "\
    FROM products WHERE NOT deleted \
    AND ($1::text IS NULL OR name ILIKE $1 OR sku ILIKE $1) \
    AND (NOT $2 OR published)";

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            sku: row.try_get("sku")?,
            published: row.try_get("published")?,
        })
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn get_products_by_ids(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError> {
        let ids: Vec<i64> = products.iter().map(|id| id.into_inner()).collect();

        query_as::<Postgres, Product>(GET_PRODUCTS_BY_IDS_SQL)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn search_products(&self, search: ProductSearch) -> Result<ProductPage, RepositoryError> {
        let pattern = search.keywords.as_deref().map(like_pattern);
        let limit = i64::from(search.page_size);
        let offset = i64::try_from(search.offset()).map_err(|_overflow| RepositoryError::InvalidData)?;

        let total: i64 = query_scalar(&format!("SELECT COUNT(*) {SEARCH_FILTER_SQL}"))
            .bind(pattern.as_deref())
            .bind(search.published_only)
            .fetch_one(&self.pool)
            .await?;

        let products = query_as::<Postgres, Product>(&format!(
            "SELECT id, name, sku, published {SEARCH_FILTER_SQL} ORDER BY name, id LIMIT $3 OFFSET $4"
        ))
        .bind(pattern.as_deref())
        .bind(search.published_only)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(ProductPage {
            products,
            total: u64::try_from(total).unwrap_or_default(),
            page: search.page,
            page_size: search.page_size,
        })
    }
}

/// `ILIKE` pattern matching `keywords` anywhere, with wildcards escaped.
fn like_pattern(keywords: &str) -> String {
    let mut pattern = String::with_capacity(keywords.len() + 2);

    pattern.push('%');

    for character in keywords.chars() {
        if matches!(character, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(character);
    }

    pattern.push('%');

    pattern
}

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Products with the given ids, in no particular order. Unknown and
    /// deleted products are left out.
    async fn get_products_by_ids(
        &self,
        products: &[ProductId],
    ) -> Result<Vec<Product>, RepositoryError>;

    /// One page of products for the product picker.
    async fn search_products(&self, search: ProductSearch) -> Result<ProductPage, RepositoryError>;
}
