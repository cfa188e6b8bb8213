//! Leaf and internal-node hashing.
//!
//! - Leaf nodes:     `H(value)`
//! - Internal nodes: `H(enc(left) || enc(right))`
//!
//! `enc` is fixed per [`HashScheme`]: raw digest bytes by default, or the
//! lowercase hex text of each digest for [`NodeEncoding::Hex`]. Build, proof
//! derivation and verification all go through the same scheme, so mixing
//! encodings is impossible within one tree.

use bincode::{Decode, Encode};
use sha2::{Digest as _, Sha256};

use crate::{DIGEST_LEN, Digest};

/// The underlying hash function. Both produce 256-bit digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA-256.
    #[default]
    Sha256,
    /// Blake3.
    Blake3,
}

/// How two child digests are concatenated before hashing their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeEncoding {
    /// The 64 raw bytes `left || right`.
    #[default]
    Raw,
    /// The 128 ASCII bytes of `hex(left) || hex(right)`.
    Hex,
}

/// Hash function plus node encoding. Every tree and every proof carries the
/// scheme it was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashScheme {
    /// Hash function applied to leaves and to concatenated children.
    pub algorithm: HashAlgorithm,
    /// Concatenation encoding for internal nodes.
    pub encoding: NodeEncoding,
}

impl HashScheme {
    /// Create a scheme from its parts.
    pub const fn new(algorithm: HashAlgorithm, encoding: NodeEncoding) -> Self {
        HashScheme {
            algorithm,
            encoding,
        }
    }

    /// SHA-256 over concatenated lowercase hex strings.
    ///
    /// Produces the same digests as tools that keep every node as a hex
    /// string and hash `(left_hex + right_hex).encode()`.
    pub const fn legacy_hex() -> Self {
        HashScheme::new(HashAlgorithm::Sha256, NodeEncoding::Hex)
    }

    /// Blake3 over raw bytes.
    pub const fn blake3() -> Self {
        HashScheme::new(HashAlgorithm::Blake3, NodeEncoding::Raw)
    }

    /// Hash an arbitrary byte string.
    pub fn hash(&self, data: &[u8]) -> Digest {
        self.hash_parts(&[data])
    }

    /// Hash a leaf value: `H(value)`.
    pub fn leaf_hash(&self, value: &[u8]) -> Digest {
        self.hash(value)
    }

    /// Hash an internal node from its children, left then right.
    pub fn node_hash(&self, left: &Digest, right: &Digest) -> Digest {
        match self.encoding {
            NodeEncoding::Raw => self.hash_parts(&[left.as_bytes(), right.as_bytes()]),
            NodeEncoding::Hex => {
                let left_hex = left.to_hex();
                let right_hex = right.to_hex();
                self.hash_parts(&[left_hex.as_bytes(), right_hex.as_bytes()])
            }
        }
    }

    /// Feed `parts` to the hasher in order, as one contiguous input.
    fn hash_parts(&self, parts: &[&[u8]]) -> Digest {
        let bytes: [u8; DIGEST_LEN] = match self.algorithm {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                for part in parts {
                    hasher.update(part);
                }
                hasher.finalize().into()
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                for part in parts {
                    hasher.update(part);
                }
                *hasher.finalize().as_bytes()
            }
        };
        Digest::new(bytes)
    }
}
