use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleError>`.
pub type Result<T> = core::result::Result<T, MerkleError>;

/// Errors from binary Merkle tree operations.
///
/// A proof that fails to verify is not an error: verification reports a
/// mismatch as `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A proof was requested for a leaf index outside `[0, leaf_count)`.
    #[error("leaf index {index} out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested 0-based leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// A query token resolved to no leaf.
    #[error("no leaf matches query {0:?}")]
    NotFound(String),
    /// Text that should hold a 32-byte hex digest could not be parsed.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
    /// Proof bytes or proof text could not be decoded.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
