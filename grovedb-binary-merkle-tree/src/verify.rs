//! Proof verification.
//!
//! Pure functions: the root is recomputed from the value and the proof's
//! sibling digests and compared to the expected root. A proof that does not
//! match, for whatever reason, verifies as `false`; nothing here fails.

use crate::{Digest, MerkleProof, ProofSide};

impl MerkleProof {
    /// Recompute the root implied by `value` and this proof.
    pub fn compute_root(&self, value: &[u8]) -> Digest {
        let scheme = self.scheme();
        self.steps()
            .iter()
            .fold(scheme.leaf_hash(value), |current, step| match step.side {
                ProofSide::Left => scheme.node_hash(&step.sibling, &current),
                ProofSide::Right => scheme.node_hash(&current, &step.sibling),
            })
    }

    /// Whether `value` is included under `expected_root` according to this
    /// proof.
    pub fn verify(&self, value: &[u8], expected_root: &Digest) -> bool {
        &self.compute_root(value) == expected_root
    }
}

/// Whether `value` is included under `expected_root` according to `proof`.
pub fn verify(value: impl AsRef<[u8]>, proof: &MerkleProof, expected_root: &Digest) -> bool {
    proof.verify(value.as_ref(), expected_root)
}

/// Like [`verify`], with the root given as hex text.
///
/// An empty root (the empty-tree sentinel) or text that is not a 32-byte hex
/// digest never verifies.
pub fn verify_hex(value: impl AsRef<[u8]>, proof: &MerkleProof, expected_root_hex: &str) -> bool {
    match Digest::from_hex(expected_root_hex) {
        Ok(root) => proof.verify(value.as_ref(), &root),
        Err(_) => false,
    }
}
