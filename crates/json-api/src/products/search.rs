//! Product Search Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use has_one_product_app::domain::products::models::{
    DEFAULT_PAGE_SIZE, Product, ProductPage, ProductSearch,
};

use crate::{configuration::errors::into_status_error, extensions::*};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product identifier, as used in product lists
    pub id: i64,

    /// Display name of the product
    pub name: String,

    /// Stock keeping unit, when the host has one
    pub sku: Option<String>,

    /// Whether the product is visible in the storefront
    pub published: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into_inner(),
            name: product.name,
            sku: product.sku,
            published: product.published,
        }
    }
}

/// Product Page Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPageResponse {
    /// Products on this page
    pub products: Vec<ProductResponse>,

    /// Matching products across all pages
    pub total: u64,

    /// Zero-based index of this page
    pub page: u32,

    /// Products per page after clamping
    pub page_size: u32,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products.into_iter().map(Into::into).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

/// Product Search Handler
///
/// One page of the product picker shown next to the product list.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Page of products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    keywords: QueryParam<String, false>,
    published_only: QueryParam<bool, false>,
    page: QueryParam<u32, false>,
    page_size: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let search = ProductSearch {
        keywords: keywords.into_inner(),
        published_only: published_only.into_inner().unwrap_or(false),
        page: page.into_inner().unwrap_or(0),
        page_size: page_size.into_inner().unwrap_or(DEFAULT_PAGE_SIZE),
    };

    let page = state
        .app
        .configuration
        .search_products(search)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use has_one_product::prelude::ProductId;
    use has_one_product_app::configuration::MockConfigurationService;

    use crate::test_helpers::configuration_service;

    use super::*;

    fn make_service(configuration: MockConfigurationService) -> Service {
        configuration_service(
            configuration,
            Router::with_path("products/search").get(handler),
        )
    }

    #[tokio::test]
    async fn test_search_uses_defaults() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_search_products()
            .once()
            .withf(|search| *search == ProductSearch::default())
            .return_once(|search| {
                Ok(ProductPage {
                    products: Vec::new(),
                    total: 0,
                    page: search.page,
                    page_size: search.page_size,
                })
            });

        let body: ProductPageResponse = TestClient::get("http://example.com/products/search")
            .send(&make_service(configuration))
            .await
            .take_json()
            .await?;

        assert!(body.products.is_empty());
        assert_eq!(body.page_size, DEFAULT_PAGE_SIZE);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_passes_query() -> TestResult {
        let mut configuration = MockConfigurationService::new();

        configuration
            .expect_search_products()
            .once()
            .withf(|search| {
                search.keywords.as_deref() == Some("mug")
                    && search.published_only
                    && search.page == 2
                    && search.page_size == 10
            })
            .return_once(|search| {
                Ok(ProductPage {
                    products: vec![Product {
                        id: ProductId::new(77),
                        name: "Mug".to_owned(),
                        sku: Some("MUG-1".to_owned()),
                        published: true,
                    }],
                    total: 21,
                    page: search.page,
                    page_size: search.page_size,
                })
            });

        let body: ProductPageResponse = TestClient::get(
            "http://example.com/products/search?keywords=mug&published_only=true&page=2&page_size=10",
        )
        .send(&make_service(configuration))
        .await
        .take_json()
        .await?;

        assert_eq!(body.total, 21);
        assert_eq!(body.products.len(), 1, "expected one product");
        assert_eq!(
            body.products.first().map(|product| product.id),
            Some(77)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_search_invalid_page_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/search?page=-1")
            .send(&make_service(MockConfigurationService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
