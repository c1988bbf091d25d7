//! Rule Specifications
//!
//! A specification is the administrator-entered product list, for example
//! `77, 123:2, 156:3-8`. Entries are alternatives: the rule holds when the cart
//! satisfies any one of them. A blank specification places no restriction.
//!
//! Malformed entries are handled differently depending on their form. A
//! malformed qualified entry (one with a `:`) ends evaluation with no match,
//! while a malformed bare id is skipped. The asymmetry is probably accidental,
//! but stored configurations rely on it.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

use crate::cart::CartTotals;

mod entry;
mod error;

pub use entry::RequirementEntry;
pub use error::EntryError;

/// Parsed rule specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpecification {
    /// Nothing configured; every cart qualifies.
    Unrestricted,

    /// At least one token configured.
    Restricted(Restriction),
}

/// Entries of a configured specification.
///
/// `entries` holds only what evaluation can reach. Parsing stops at the first
/// malformed qualified entry, so anything after it is counted in
/// `unreachable` and otherwise dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restriction {
    entries: SmallVec<[RequirementEntry; 4]>,
    skipped: SmallVec<[EntryError; 1]>,
    aborted_at: Option<EntryError>,
    unreachable: usize,
}

/// A problem worth showing to whoever maintains the specification.
///
/// Warnings never change how a specification evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationWarning {
    /// The entry is ignored.
    Skipped(EntryError),

    /// Evaluation stops at this entry without a match.
    Aborted {
        /// The malformed entry.
        error: EntryError,

        /// Number of entries after it that are never checked.
        unreachable: usize,
    },
}

impl RuleSpecification {
    /// Parse specification text.
    ///
    /// Parsing never fails. Blank text is [`RuleSpecification::Unrestricted`];
    /// anything else is restricted, even when no usable entry remains.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Unrestricted;
        }

        let mut restriction = Restriction::default();
        let mut tokens = text.split(',').map(str::trim).filter(|token| !token.is_empty());

        while let Some(token) = tokens.next() {
            match token.parse::<RequirementEntry>() {
                Ok(entry) => restriction.entries.push(entry),
                Err(error) if error.aborts_evaluation() => {
                    restriction.aborted_at = Some(error);
                    restriction.unreachable = tokens.by_ref().count();

                    break;
                }
                Err(error) => restriction.skipped.push(error),
            }
        }

        Self::Restricted(restriction)
    }

    /// Whether the cart satisfies the specification.
    #[must_use]
    pub fn matches(&self, totals: &CartTotals) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(restriction) => restriction
                .entries
                .iter()
                .any(|entry| entry.matches(totals)),
        }
    }

    /// Whether nothing is configured.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Entries evaluation will check, in order.
    #[must_use]
    pub fn entries(&self) -> &[RequirementEntry] {
        match self {
            Self::Unrestricted => &[],
            Self::Restricted(restriction) => restriction.entries.as_slice(),
        }
    }

    /// Malformed bare ids that were skipped.
    #[must_use]
    pub fn skipped(&self) -> &[EntryError] {
        match self {
            Self::Unrestricted => &[],
            Self::Restricted(restriction) => restriction.skipped.as_slice(),
        }
    }

    /// The malformed qualified entry evaluation stops at, if any.
    #[must_use]
    pub fn aborted_at(&self) -> Option<&EntryError> {
        match self {
            Self::Unrestricted => None,
            Self::Restricted(restriction) => restriction.aborted_at.as_ref(),
        }
    }

    /// Problems found while parsing, in the order they appear in the text.
    #[must_use]
    pub fn warnings(&self) -> Vec<SpecificationWarning> {
        let Self::Restricted(restriction) = self else {
            return Vec::new();
        };

        let mut warnings: Vec<SpecificationWarning> = restriction
            .skipped
            .iter()
            .cloned()
            .map(SpecificationWarning::Skipped)
            .collect();

        if let Some(error) = &restriction.aborted_at {
            warnings.push(SpecificationWarning::Aborted {
                error: error.clone(),
                unreachable: restriction.unreachable,
            });
        }

        warnings
    }
}

impl Display for SpecificationWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Skipped(error) => write!(f, "{error}; the entry is ignored"),
            Self::Aborted { error, unreachable } => write!(
                f,
                "{error}; no cart will match past this entry ({unreachable} later entries are never checked)"
            ),
        }
    }
}

/// Parse `specification` and match it against `totals`.
#[must_use]
pub fn evaluate(specification: &str, totals: &CartTotals) -> bool {
    RuleSpecification::parse(specification).matches(totals)
}
