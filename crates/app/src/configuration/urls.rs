//! Configuration page URLs.

use has_one_product::prelude::{DiscountId, RequirementId};

/// Details of the current admin request needed to build links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Path the admin surface is mounted under, e.g. `/admin/rules`.
    pub base_path: String,
}

impl RequestContext {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

/// Link to the configuration page of a discount's requirement.
#[must_use]
pub fn configuration_url(
    context: &RequestContext,
    discount: DiscountId,
    requirement: Option<RequirementId>,
) -> String {
    let base = context.base_path.trim_end_matches('/');

    match requirement {
        Some(requirement) => {
            format!("{base}/discounts/{discount}/requirements/configure?requirement={requirement}")
        }
        None => format!("{base}/discounts/{discount}/requirements/configure"),
    }
}
