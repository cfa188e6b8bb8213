use log::{debug, trace};

use crate::{Digest, HashScheme, MerkleError, MerkleProof, ProofSide, ProofStep, Result};

/// A binary Merkle tree with every layer retained.
///
/// `layers[0]` holds one leaf digest per input value, in input order. Each
/// following layer has `ceil(len / 2)` digests, and the last layer holds
/// exactly one digest, the root. An odd trailing digest is paired with
/// itself when building its parent.
///
/// A tree built from no values keeps a single empty layer and has no root.
///
/// The tree is never mutated after [`build`](Self::build); to reflect new
/// input, build a new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    scheme: HashScheme,
    layers: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree over `values` with the default scheme (SHA-256, raw
    /// concatenation).
    pub fn build<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]>,
    {
        Self::build_with_scheme(values, HashScheme::default())
    }

    /// Build a tree over `values` with an explicit hash scheme.
    pub fn build_with_scheme<I, V>(values: I, scheme: HashScheme) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]>,
    {
        let leaves: Vec<Digest> = values
            .into_iter()
            .map(|value| scheme.leaf_hash(value.as_ref()))
            .collect();
        let leaf_count = leaves.len();

        let mut layers = vec![leaves];
        while let Some(top) = layers.last().filter(|layer| layer.len() > 1) {
            let next = combine_layer(&scheme, top);
            layers.push(next);
        }

        debug!(
            "built merkle tree: {} leaves, height {}, scheme {:?}",
            leaf_count,
            layers.len() - 1,
            scheme
        );
        MerkleTree { scheme, layers }
    }

    /// The scheme this tree was built with.
    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// All layers, leaves first, root layer last.
    pub fn layers(&self) -> &[Vec<Digest>] {
        &self.layers
    }

    /// The leaf layer.
    pub fn leaves(&self) -> &[Digest] {
        &self.layers[0]
    }

    /// Leaf digest at `index`, if any.
    pub fn leaf(&self, index: usize) -> Option<&Digest> {
        self.leaves().get(index)
    }

    /// Number of leaves (input values).
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Whether the tree was built from no values.
    pub fn is_empty(&self) -> bool {
        self.leaves().is_empty()
    }

    /// Number of layers above the leaves. Equal to the length of every proof
    /// this tree derives.
    pub fn height(&self) -> usize {
        self.layers.len() - 1
    }

    /// The root digest, or `None` for a tree built from no values.
    pub fn root(&self) -> Option<Digest> {
        self.layers.last().and_then(|layer| layer.first()).copied()
    }

    /// The root as lowercase hex, or the empty string for an empty tree.
    ///
    /// The empty string is a "no data" sentinel, never a valid digest.
    pub fn root_hex(&self) -> String {
        self.root().map(|root| root.to_hex()).unwrap_or_default()
    }

    /// Derive the inclusion proof for the leaf at `index` (0-based).
    ///
    /// Walks from the leaf layer up to, but not including, the root layer,
    /// recording the sibling of the current node at each level. The last
    /// node of an odd-length layer is its own sibling.
    pub fn prove(&self, index: usize) -> Result<MerkleProof> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut steps = Vec::with_capacity(self.height());
        let mut idx = index;
        for layer in self.layers.iter().take(self.height()) {
            let sibling_index = idx ^ 1;
            let sibling = layer.get(sibling_index).unwrap_or(&layer[idx]);
            let side = if sibling_index > idx {
                ProofSide::Right
            } else {
                ProofSide::Left
            };
            steps.push(ProofStep::new(side, *sibling));
            idx /= 2;
        }

        trace!(
            "derived proof for leaf {} of {}: {} steps",
            index,
            leaf_count,
            steps.len()
        );
        Ok(MerkleProof::new(self.scheme, index as u64, steps))
    }
}

/// Combine one layer into the next, pairing left to right. An unpaired last
/// digest is combined with itself.
fn combine_layer(scheme: &HashScheme, layer: &[Digest]) -> Vec<Digest> {
    layer
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            scheme.node_hash(left, right)
        })
        .collect()
}
