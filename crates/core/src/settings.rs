//! Settings keys and rule identity.

use crate::ids::RequirementId;

/// System name the host uses to route requirement checks to this rule.
pub const RULE_SYSTEM_NAME: &str = "DiscountRequirement.HasOneProduct";

/// Prefix of the settings key holding a requirement's product list.
pub const SETTINGS_KEY_PREFIX: &str = "DiscountRequirement.RestrictedProductIds-";

/// Settings key under which the rule specification of `requirement` is stored.
#[must_use]
pub fn settings_key(requirement: RequirementId) -> String {
    format!("{SETTINGS_KEY_PREFIX}{requirement}")
}
