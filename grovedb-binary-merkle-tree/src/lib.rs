//! Binary Merkle tree over an ordered list of values.
//!
//! Every value is hashed into a leaf digest. Layers are then combined
//! pairwise, left to right, until a single root digest remains:
//!
//! `node = H(left || right)`
//!
//! When a layer has an odd number of digests, the last one is paired with
//! itself (`H(last || last)`) rather than promoted unchanged. All layers are
//! retained so that an inclusion proof for any leaf can be read off the tree.
//!
//! # Core types
//!
//! - [`MerkleTree`] — the immutable layered tree (build, root, prove).
//! - [`MerkleProof`] — a self-contained inclusion proof for one leaf.
//! - [`Digest`] — a 32-byte digest, displayed as lowercase hex.
//! - [`HashScheme`] — hash function and node-concatenation encoding.
//! - [`LeafQuery`] — resolves a user token (1-based index or literal value) to
//!   a leaf index.
//!
//! # Example
//!
//! ```
//! use grovedb_binary_merkle_tree::{MerkleTree, verify};
//!
//! let values = ["a", "b", "c", "d"];
//! let tree = MerkleTree::build(values);
//! let root = tree.root().expect("non-empty tree has a root");
//!
//! let proof = tree.prove(2).expect("index 2 is in range");
//! assert_eq!(proof.len(), tree.height());
//! assert!(verify(b"c", &proof, &root));
//! assert!(!verify(b"x", &proof, &root));
//! ```

#![warn(missing_docs)]

mod digest;
mod error;
pub(crate) mod hash;
pub(crate) mod proof;
mod query;
pub(crate) mod tree;
mod verify;


pub use digest::{DIGEST_LEN, Digest};
pub use error::{MerkleError, Result};
pub use hash::{HashAlgorithm, HashScheme, NodeEncoding};
pub use proof::{MAX_PROOF_STEPS, MerkleProof, ProofSide, ProofStep};
pub use query::LeafQuery;
pub use tree::MerkleTree;
pub use verify::{verify, verify_hex};
