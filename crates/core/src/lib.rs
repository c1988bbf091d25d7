//! Has One Product
//!
//! Discount requirement rule that restricts a discount to carts containing at
//! least one product from a configured list, optionally qualified by an exact
//! quantity or an inclusive quantity range.
//!
//! The rule is stored as text (`77, 123:2, 156:3-8`) and parsed into a
//! [`RuleSpecification`](specification::RuleSpecification) before it is
//! matched against a cart's per-product [`CartTotals`](cart::CartTotals).

pub mod cart;
pub mod ids;
pub mod names;
pub mod prelude;
pub mod settings;
pub mod specification;
