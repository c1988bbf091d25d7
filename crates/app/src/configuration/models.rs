//! Configuration Models

use has_one_product::prelude::{DiscountId, RequirementId, SpecificationWarning};

/// Configuration shown on the admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementConfiguration {
    pub discount: DiscountId,

    /// `None` while configuring a requirement that does not exist yet.
    pub requirement: Option<RequirementId>,

    /// Stored specification text, verbatim.
    pub product_ids: String,
}

/// Configuration submitted by the admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationUpdate {
    pub discount: DiscountId,

    /// Requirement to update; a new one is created when absent or unknown.
    pub requirement: Option<RequirementId>,
    pub product_ids: String,
}

/// Result of saving a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedConfiguration {
    pub requirement: RequirementId,

    /// Whether the requirement was created by this save.
    pub created: bool,

    /// Malformed entries found in the saved text. They are stored anyway.
    pub warnings: Vec<SpecificationWarning>,
}
