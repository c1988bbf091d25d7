//! Product Models

use has_one_product::prelude::ProductId;

/// Largest page the product picker returns.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: Option<String>,
    pub published: bool,
}

/// Product picker query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearch {
    /// Text matched against product names and SKUs.
    pub keywords: Option<String>,

    /// Hide unpublished products.
    pub published_only: bool,

    /// Zero-based page index.
    pub page: u32,

    /// Products per page.
    pub page_size: u32,
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self {
            keywords: None,
            published_only: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductSearch {
    /// Drop blank keywords and clamp the page size to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn normalised(self) -> Self {
        Self {
            keywords: self
                .keywords
                .map(|keywords| keywords.trim().to_owned())
                .filter(|keywords| !keywords.is_empty()),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            ..self
        }
    }

    /// Rows skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }
}

/// One page of product picker results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub products: Vec<Product>,

    /// Matching products across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}
