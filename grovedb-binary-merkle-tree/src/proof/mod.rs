//! Inclusion proofs for a single leaf of a [`MerkleTree`](crate::MerkleTree).
//!
//! A `MerkleProof` lists, from the leaf level upward, the sibling digest of
//! each node on the path to the root together with the side the sibling sits
//! on. It also records the leaf index and the [`HashScheme`] needed to
//! recombine it, so verification requires nothing but the proof, the value
//! and the expected root.
//!
//! The text form is one step per line, `L <hex>` or `R <hex>`.

use std::{fmt, str::FromStr};

use bincode::{Decode, Encode};

use crate::{Digest, HashScheme, MerkleError, Result};

mod tests;

/// Upper bound on the number of steps accepted when decoding a proof. A tree
/// over at most `usize::MAX` leaves is never taller than this.
pub const MAX_PROOF_STEPS: usize = 64;

/// Which side of the current node a sibling digest sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProofSide {
    /// The sibling is the left child: parent = `H(sibling || current)`.
    Left,
    /// The sibling is the right child: parent = `H(current || sibling)`.
    Right,
}

impl ProofSide {
    /// The one-character marker used in the text form.
    pub fn marker(self) -> char {
        match self {
            ProofSide::Left => 'L',
            ProofSide::Right => 'R',
        }
    }
}

impl fmt::Display for ProofSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

impl FromStr for ProofSide {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(ProofSide::Left),
            "R" => Ok(ProofSide::Right),
            other => Err(MerkleError::InvalidProof(format!(
                "unknown side marker {:?}, expected \"L\" or \"R\"",
                other
            ))),
        }
    }
}

/// One level of a proof: a sibling digest and its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofStep {
    /// Position of the sibling relative to the node being folded upward.
    pub side: ProofSide,
    /// The sibling digest.
    pub sibling: Digest,
}

impl ProofStep {
    /// Create a step.
    pub fn new(side: ProofSide, sibling: Digest) -> Self {
        ProofStep { side, sibling }
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.sibling)
    }
}

/// An inclusion proof for one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerkleProof {
    scheme: HashScheme,
    leaf_index: u64,
    steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Construct a proof from its parts.
    pub fn new(scheme: HashScheme, leaf_index: u64, steps: Vec<ProofStep>) -> Self {
        MerkleProof {
            scheme,
            leaf_index,
            steps,
        }
    }

    /// The scheme used to recombine this proof.
    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// The 0-based index of the proved leaf.
    pub fn leaf_index(&self) -> u64 {
        self.leaf_index
    }

    /// The steps, leaf level first.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Consume the proof and return its steps.
    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }

    /// Number of steps (the height of the tree it was derived from).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the proof has no steps, as for a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps as `(marker, hex)` pairs.
    pub fn to_hex_steps(&self) -> Vec<(char, String)> {
        self.steps
            .iter()
            .map(|step| (step.side.marker(), step.sibling.to_hex()))
            .collect()
    }

    /// Rebuild a proof from `(marker, hex)` pairs, the inverse of
    /// [`to_hex_steps`](Self::to_hex_steps).
    pub fn from_hex_steps<S, H>(
        scheme: HashScheme,
        leaf_index: u64,
        steps: impl IntoIterator<Item = (S, H)>,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        H: AsRef<str>,
    {
        let steps = steps
            .into_iter()
            .map(|(side, sibling)| {
                Ok(ProofStep::new(
                    side.as_ref().parse()?,
                    Digest::from_hex(sibling.as_ref())?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::checked(scheme, leaf_index, steps)
    }

    /// Parse the text form produced by `Display`: one `L <hex>` or
    /// `R <hex>` per line. Blank lines are ignored.
    pub fn parse_text(scheme: HashScheme, leaf_index: u64, text: &str) -> Result<Self> {
        let steps = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(side), Some(sibling), None) => Ok((side, sibling)),
                    _ => Err(MerkleError::InvalidProof(format!(
                        "malformed proof line {:?}",
                        line
                    ))),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_hex_steps(scheme, leaf_index, steps)
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects trailing bytes and proofs longer than [`MAX_PROOF_STEPS`].
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 1024 * 1024 }>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(MerkleError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        Self::checked(proof.scheme, proof.leaf_index, proof.steps)
    }

    fn checked(scheme: HashScheme, leaf_index: u64, steps: Vec<ProofStep>) -> Result<Self> {
        if steps.len() > MAX_PROOF_STEPS {
            return Err(MerkleError::InvalidProof(format!(
                "proof has {} steps (max {})",
                steps.len(),
                MAX_PROOF_STEPS
            )));
        }
        Ok(MerkleProof::new(scheme, leaf_index, steps))
    }
}

impl fmt::Display for MerkleProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
