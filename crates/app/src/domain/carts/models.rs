//! Cart Models

/// Kind of cart a line belongs to.
///
/// The host also stores wishlists in the same table; the rule only reads
/// shopping carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartType {
    /// Items the customer intends to buy.
    ShoppingCart,
}

impl CartType {
    /// Value stored in the host's `cart_type` column.
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::ShoppingCart => 1,
        }
    }
}
