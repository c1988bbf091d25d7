//! Cart Repository

use async_trait::async_trait;
use has_one_product::prelude::{CartLine, CustomerId, ProductId, StoreId};
use mockall::automock;
use sqlx::{PgPool, query_as};

use crate::domain::{carts::models::CartType, errors::RepositoryError};

const GET_CART_LINES_SQL: &str = "\
    SELECT product_id, quantity FROM shopping_cart_items \
    WHERE customer_id = $1 AND cart_type = $2 AND store_id = $3 \
    ORDER BY id";

#[derive(Debug, Clone)]
pub struct PgCartRepository {
    pool: PgPool,
}

impl PgCartRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn get_cart_lines(
        &self,
        customer: CustomerId,
        cart_type: CartType,
        store: StoreId,
    ) -> Result<Vec<CartLine>, RepositoryError> {
        let rows: Vec<(i64, i64)> = query_as(GET_CART_LINES_SQL)
            .bind(customer.into_inner())
            .bind(cart_type.as_i16())
            .bind(store.into_inner())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, quantity)| CartLine::new(ProductId::new(product), quantity))
            .collect())
    }
}

#[automock]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Raw, ungrouped lines of a customer's cart in a store.
    async fn get_cart_lines(
        &self,
        customer: CustomerId,
        cart_type: CartType,
        store: StoreId,
    ) -> Result<Vec<CartLine>, RepositoryError>;
}
