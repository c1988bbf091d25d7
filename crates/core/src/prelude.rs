//! Has One Product prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartLine, CartTotals},
    ids::{CustomerId, DiscountId, ProductId, RequirementId, StoreId, TypedId},
    names::friendly_name_ids,
    settings::{RULE_SYSTEM_NAME, settings_key},
    specification::{
        EntryError, RequirementEntry, RuleSpecification, SpecificationWarning, evaluate,
    },
};
