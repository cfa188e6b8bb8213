//! Resolution of a user-supplied token to a leaf index.
//!
//! A token is either a 1-based position or a literal value. Numeric tokens
//! are always treated as positions: an out-of-range number does not fall
//! back to a value lookup.

use crate::{MerkleError, MerkleProof, MerkleTree, Result};

/// A parsed leaf lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafQuery {
    /// A 1-based position, not yet checked against the value list.
    Position(i64),
    /// A literal value; resolves to its first occurrence.
    Value(Vec<u8>),
}

impl LeafQuery {
    /// Parse a token. Surrounding whitespace is ignored.
    ///
    /// An optional sign followed by ASCII digits is a position. Positions
    /// that overflow `i64` saturate, so they stay out of range.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return LeafQuery::Value(token.as_bytes().to_vec());
        }
        let position = token.parse::<i64>().unwrap_or(if token.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        });
        LeafQuery::Position(position)
    }

    /// Resolve against the values the tree was built from, returning the
    /// 0-based leaf index.
    pub fn resolve<V: AsRef<[u8]>>(&self, values: &[V]) -> Option<usize> {
        match self {
            LeafQuery::Position(position) => usize::try_from(*position)
                .ok()
                .filter(|position| (1..=values.len()).contains(position))
                .map(|position| position - 1),
            LeafQuery::Value(wanted) => values
                .iter()
                .position(|value| value.as_ref() == wanted.as_slice()),
        }
    }
}

impl MerkleTree {
    /// Resolve `token` against `values` (see [`LeafQuery`]) and prove the
    /// leaf it names.
    ///
    /// `values` must be the list this tree was built from.
    pub fn prove_query<V: AsRef<[u8]>>(&self, values: &[V], token: &str) -> Result<MerkleProof> {
        let index = LeafQuery::parse(token)
            .resolve(values)
            .ok_or_else(|| MerkleError::NotFound(token.trim().to_string()))?;
        self.prove(index)
    }
}
