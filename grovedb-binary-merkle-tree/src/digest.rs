//! The fixed-length digest type and its hex form.

use std::{fmt, str::FromStr};

use bincode::{Decode, Encode};

use crate::{MerkleError, Result};

/// Length in bytes of every digest produced by a [`HashScheme`](crate::HashScheme).
pub const DIGEST_LEN: usize = 32;

/// A 32-byte hash output.
///
/// Internally digests are combined as raw bytes (unless a scheme asks for
/// hex concatenation); the lowercase hex string is the display and transport
/// form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Encode, Decode)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest and return its bytes.
    pub fn to_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string. Upper and lower case are accepted.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(text, &mut bytes)
            .map_err(|e| MerkleError::InvalidDigest(format!("{:?}: {}", text, e)))?;
        Ok(Digest(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        Digest::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serde::Serialize::serialize(&self.0, serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = <String as serde::Deserialize>::deserialize(deserializer)?;
            Digest::from_hex(&text).map_err(serde::de::Error::custom)
        } else {
            <[u8; DIGEST_LEN] as serde::Deserialize>::deserialize(deserializer).map(Digest)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use hex_literal::hex;

    use super::*;

    const SHA256_A: [u8; 32] =
        hex!("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb");

    #[test]
    fn test_hex_round_trip() {
        let digest = Digest::new(SHA256_A);
        let text = digest.to_hex();
        assert_eq!(
            text,
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"
        );
        assert_eq!(Digest::from_hex(&text), Ok(digest));
        assert_eq!(digest.to_string(), text);
    }

    #[test]
    fn test_from_hex_accepts_uppercase() {
        let upper = "CA978112CA1BBDCAFAC231B39A23DC4DA786EFF8147C4E72B9807785AFEE48BB";
        assert_eq!(upper.parse::<Digest>(), Ok(Digest::new(SHA256_A)));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_matches!(Digest::from_hex(""), Err(MerkleError::InvalidDigest(_)));
        assert_matches!(Digest::from_hex("abcd"), Err(MerkleError::InvalidDigest(_)));
        let not_hex = "zz".repeat(32);
        assert_matches!(Digest::from_hex(&not_hex), Err(MerkleError::InvalidDigest(_)));
        let too_long = "00".repeat(33);
        assert_matches!(Digest::from_hex(&too_long), Err(MerkleError::InvalidDigest(_)));
    }

    #[test]
    fn test_debug_shows_hex() {
        let digest = Digest::new([0u8; 32]);
        assert_eq!(format!("{:?}", digest), format!("Digest({})", "00".repeat(32)));
    }
}
