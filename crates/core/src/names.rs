//! Friendly-name token extraction.
//!
//! The admin form shows product names next to the raw specification. That
//! display only needs the product ids, so quantity qualifiers are dropped and
//! anything that does not parse is ignored. Nothing here affects matching.

use crate::ids::ProductId;

/// Product ids mentioned in `text`, in order of appearance.
///
/// Each comma-separated token is trimmed, cut at its first `:`, and kept when
/// the remainder parses as an integer.
#[must_use]
pub fn friendly_name_ids(text: &str) -> Vec<ProductId> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let product = token.split_once(':').map_or(token, |(product, _)| product);

            product.parse().ok()
        })
        .collect()
}
