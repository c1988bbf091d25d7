//! Cart Totals
//!
//! Cart lines for the same product can differ by their attribute selection.
//! The rule only cares about how many of each product are in the cart, so
//! lines are summed per product before matching.

use rustc_hash::FxHashMap;

use crate::ids::ProductId;

/// One line of a shopping cart, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    /// Product referenced by the line.
    pub product: ProductId,

    /// Quantity on this line.
    pub quantity: i64,
}

impl CartLine {
    /// Create a cart line.
    #[must_use]
    pub const fn new(product: ProductId, quantity: i64) -> Self {
        Self { product, quantity }
    }
}

/// Total quantity per distinct product in a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartTotals {
    totals: FxHashMap<ProductId, i64>,
}

impl CartTotals {
    /// Create empty totals (an empty cart).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group cart lines by product and sum their quantities.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = CartLine>,
    {
        lines.into_iter().collect()
    }

    /// Add a line's quantity to its product's total.
    pub fn add(&mut self, line: CartLine) {
        let total = self.totals.entry(line.product).or_insert(0);

        *total = total.saturating_add(line.quantity);
    }

    /// Total quantity of `product`, or `None` when no line references it.
    #[must_use]
    pub fn quantity(&self, product: ProductId) -> Option<i64> {
        self.totals.get(&product).copied()
    }

    /// Whether any line references `product`.
    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.totals.contains_key(&product)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl FromIterator<CartLine> for CartTotals {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        let mut totals = Self::new();

        for line in iter {
            totals.add(line);
        }

        totals
    }
}

impl Extend<CartLine> for CartTotals {
    fn extend<I: IntoIterator<Item = CartLine>>(&mut self, iter: I) {
        for line in iter {
            self.add(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_lines_for_the_same_product() {
        let totals = CartTotals::from_lines([
            CartLine::new(ProductId::new(77), 1),
            CartLine::new(ProductId::new(78), 4),
            CartLine::new(ProductId::new(77), 2),
        ]);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.quantity(ProductId::new(77)), Some(3));
        assert_eq!(totals.quantity(ProductId::new(78)), Some(4));
    }

    #[test]
    fn absent_product_has_no_quantity() {
        let totals = CartTotals::from_lines([CartLine::new(ProductId::new(77), 1)]);

        assert_eq!(totals.quantity(ProductId::new(1)), None);
        assert!(!totals.contains(ProductId::new(1)));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let totals = CartTotals::from_lines([
            CartLine::new(ProductId::new(1), i64::MAX),
            CartLine::new(ProductId::new(1), 10),
        ]);

        assert_eq!(totals.quantity(ProductId::new(1)), Some(i64::MAX));
    }

    #[test]
    fn extend_adds_to_existing_totals() {
        let mut totals = CartTotals::new();

        assert!(totals.is_empty());

        totals.extend([CartLine::new(ProductId::new(5), 2)]);
        totals.extend([CartLine::new(ProductId::new(5), 3)]);

        assert_eq!(totals.quantity(ProductId::new(5)), Some(5));
    }
}
