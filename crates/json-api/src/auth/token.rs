//! Admin token digest.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use sha2::{Digest, Sha256};

/// The configured admin bearer token, kept only as its SHA-256 digest.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct AdminToken {
    digest: [u8; 32],
}

impl AdminToken {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            digest: hash_token(raw),
        }
    }

    /// Whether `candidate` is the configured token.
    pub(crate) fn verify(&self, candidate: &str) -> bool {
        hash_token(candidate) == self.digest
    }
}

impl Debug for AdminToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("AdminToken(..)")
    }
}

fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
