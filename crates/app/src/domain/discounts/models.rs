//! Discount Models

use has_one_product::prelude::{DiscountId, RequirementId};

/// Discount Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    pub id: DiscountId,
    pub name: String,
}

/// Discount Requirement Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRequirement {
    pub id: RequirementId,
    pub discount: DiscountId,

    /// Name of the rule that evaluates the requirement.
    pub system_name: String,
}

/// New Discount Requirement Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscountRequirement {
    pub discount: DiscountId,
    pub system_name: String,
}
