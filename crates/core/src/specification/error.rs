//! Entry parse errors.

use thiserror::Error;

/// A rule entry that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// A bare entry that is not an integer product id.
    #[error("\"{0}\" is not a product id")]
    Product(String),

    /// A `<product>:<quantity>` entry with a non-integer part.
    #[error("\"{0}\" is not a product id with a quantity")]
    Quantity(String),

    /// A `<product>:<min>-<max>` entry with a non-integer part.
    #[error("\"{0}\" is not a product id with a quantity range")]
    Range(String),
}

impl EntryError {
    /// The entry text as written.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Product(token) | Self::Quantity(token) | Self::Range(token) => token,
        }
    }

    /// Whether the error ends evaluation of the whole specification.
    ///
    /// Only qualified entries (those with a `:`) do; a malformed bare id is
    /// skipped.
    #[must_use]
    pub fn aborts_evaluation(&self) -> bool {
        !matches!(self, Self::Product(_))
    }
}
