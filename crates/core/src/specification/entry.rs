//! Requirement Entries

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{cart::CartTotals, ids::ProductId};

use super::EntryError;

/// One comma-separated entry of a rule specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementEntry {
    /// `<product>`: the cart holds any quantity of the product.
    ByProduct {
        /// Required product.
        product: ProductId,
    },

    /// `<product>:<quantity>`: the cart holds exactly `quantity` of the product.
    ExactQuantity {
        /// Required product.
        product: ProductId,

        /// Required total quantity.
        quantity: i64,
    },

    /// `<product>:<min>-<max>`: the cart holds between `min` and `max`
    /// (inclusive) of the product.
    QuantityRange {
        /// Required product.
        product: ProductId,

        /// Smallest accepted total quantity.
        min: i64,

        /// Largest accepted total quantity.
        max: i64,
    },
}

impl RequirementEntry {
    /// Product the entry refers to.
    #[must_use]
    pub const fn product(&self) -> ProductId {
        match *self {
            Self::ByProduct { product }
            | Self::ExactQuantity { product, .. }
            | Self::QuantityRange { product, .. } => product,
        }
    }

    /// Whether the cart satisfies this entry.
    ///
    /// A product missing from the cart never satisfies a quantity qualifier,
    /// even one that would accept zero.
    #[must_use]
    pub fn matches(&self, totals: &CartTotals) -> bool {
        match *self {
            Self::ByProduct { product } => totals.contains(product),
            Self::ExactQuantity { product, quantity } => totals.quantity(product) == Some(quantity),
            Self::QuantityRange { product, min, max } => totals
                .quantity(product)
                .is_some_and(|total| min <= total && total <= max),
        }
    }
}

impl FromStr for RequirementEntry {
    type Err = EntryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        let Some((product, qualifier)) = token.split_once(':') else {
            return token
                .parse::<ProductId>()
                .ok()
                .map(|product| Self::ByProduct { product })
                .ok_or_else(|| EntryError::Product(token.to_owned()));
        };

        if let Some((min, max)) = qualifier.split_once('-') {
            return match (
                product.parse::<ProductId>(),
                parse_quantity(min),
                parse_quantity(max),
            ) {
                (Ok(product), Some(min), Some(max)) => Ok(Self::QuantityRange { product, min, max }),
                _ => Err(EntryError::Range(token.to_owned())),
            };
        }

        match (product.parse::<ProductId>(), parse_quantity(qualifier)) {
            (Ok(product), Some(quantity)) => Ok(Self::ExactQuantity { product, quantity }),
            _ => Err(EntryError::Quantity(token.to_owned())),
        }
    }
}

impl Display for RequirementEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ByProduct { product } => write!(f, "{product}"),
            Self::ExactQuantity { product, quantity } => write!(f, "{product}:{quantity}"),
            Self::QuantityRange { product, min, max } => write!(f, "{product}:{min}-{max}"),
        }
    }
}

fn parse_quantity(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::CartLine;

    use super::*;

    fn totals(lines: &[(i64, i64)]) -> CartTotals {
        lines
            .iter()
            .map(|&(product, quantity)| CartLine::new(ProductId::new(product), quantity))
            .collect()
    }

    #[test]
    fn parses_bare_product() -> TestResult {
        let entry: RequirementEntry = "77".parse()?;

        assert_eq!(
            entry,
            RequirementEntry::ByProduct {
                product: ProductId::new(77)
            }
        );

        Ok(())
    }

    #[test]
    fn parses_exact_quantity_with_inner_whitespace() -> TestResult {
        let entry: RequirementEntry = "77 : 2".parse()?;

        assert_eq!(
            entry,
            RequirementEntry::ExactQuantity {
                product: ProductId::new(77),
                quantity: 2
            }
        );

        Ok(())
    }

    #[test]
    fn parses_quantity_range() -> TestResult {
        let entry: RequirementEntry = "156:3-8".parse()?;

        assert_eq!(
            entry,
            RequirementEntry::QuantityRange {
                product: ProductId::new(156),
                min: 3,
                max: 8
            }
        );

        Ok(())
    }

    #[test]
    fn classifies_malformed_entries() {
        assert_eq!(
            "abc".parse::<RequirementEntry>(),
            Err(EntryError::Product("abc".to_owned()))
        );
        assert_eq!(
            "77:abc".parse::<RequirementEntry>(),
            Err(EntryError::Quantity("77:abc".to_owned()))
        );
        assert_eq!(
            "x:2".parse::<RequirementEntry>(),
            Err(EntryError::Quantity("x:2".to_owned()))
        );
        assert_eq!(
            "77:2:3".parse::<RequirementEntry>(),
            Err(EntryError::Quantity("77:2:3".to_owned()))
        );
        assert_eq!(
            "77:1-x".parse::<RequirementEntry>(),
            Err(EntryError::Range("77:1-x".to_owned()))
        );
        assert_eq!(
            "77:1-3-5".parse::<RequirementEntry>(),
            Err(EntryError::Range("77:1-3-5".to_owned()))
        );
        assert_eq!(
            "77:-1".parse::<RequirementEntry>(),
            Err(EntryError::Range("77:-1".to_owned()))
        );
    }

    #[test]
    fn only_qualified_errors_abort() {
        assert!(!EntryError::Product("a".to_owned()).aborts_evaluation());
        assert!(EntryError::Quantity("a:b".to_owned()).aborts_evaluation());
        assert!(EntryError::Range("a:b-c".to_owned()).aborts_evaluation());
    }

    #[test]
    fn missing_product_never_satisfies_zero_quantities() {
        let cart = totals(&[(1, 1)]);

        let exact = RequirementEntry::ExactQuantity {
            product: ProductId::new(77),
            quantity: 0,
        };
        let range = RequirementEntry::QuantityRange {
            product: ProductId::new(77),
            min: 0,
            max: 5,
        };

        assert!(!exact.matches(&cart));
        assert!(!range.matches(&cart));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let entry = RequirementEntry::QuantityRange {
            product: ProductId::new(77),
            min: 5,
            max: 1,
        };

        assert!(!entry.matches(&totals(&[(77, 3)])));
    }

    #[test]
    fn displays_canonical_text() -> TestResult {
        for text in ["77", "77:2", "77:1-3"] {
            assert_eq!(text.parse::<RequirementEntry>()?.to_string(), text);
        }

        assert_eq!(" 77 :  1 - 3 ".parse::<RequirementEntry>()?.to_string(), "77:1-3");

        Ok(())
    }
}
