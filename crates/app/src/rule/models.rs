//! Rule Models

use has_one_product::prelude::{CustomerId, RequirementId, StoreId};

/// Requirement check requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementRequest {
    pub requirement: RequirementId,

    /// Customer whose cart is checked; `None` when the host has no customer.
    pub customer: Option<CustomerId>,
    pub store: StoreId,
}

/// Outcome of a requirement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementCheck {
    pub is_valid: bool,
}

impl RequirementCheck {
    #[must_use]
    pub const fn valid() -> Self {
        Self { is_valid: true }
    }

    #[must_use]
    pub const fn invalid() -> Self {
        Self { is_valid: false }
    }
}
