//! Digest Primitives
//!
//! Stateless SHA-256 helpers used by the Merkle tree:
//! - Leaf hashing of canonical value strings
//! - Node hashing over the hex text of two child digests
//! - Hex parsing for digests received from outside

use sha2::{Sha256, Digest as _};
use thiserror::Error;

/// Hash output type (256 bits / 32 bytes)
pub type Digest = [u8; 32];

/// Length of a digest rendered as lowercase hex.
pub const DIGEST_HEX_LEN: usize = 64;

/// Canonical preimage of a boolean cell.
#[inline]
pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Hash a leaf value (the UTF-8 bytes of its preimage).
pub fn hash_leaf(value: &str) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

/// Hash two child nodes.
///
/// The children are combined as hex text, left then right, with no
/// separator. Verifiers holding hex digests must reproduce this exactly.
pub fn hash_nodes(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(hex::encode(left).as_bytes());
    hasher.update(hex::encode(right).as_bytes());
    hasher.finalize().into()
}

/// Render a digest as lowercase hex.
#[inline]
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}

/// Errors decoding an externally supplied digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Input is not valid hex.
    #[error("digest is not valid hex")]
    InvalidHex,
    /// Input decoded to the wrong number of bytes.
    #[error("digest must be 32 bytes, got {got}")]
    InvalidLength {
        /// Decoded byte count.
        got: usize,
    },
}

/// Parse a hex digest (either case accepted).
pub fn parse_digest(text: &str) -> Result<Digest, HashError> {
    let bytes = hex::decode(text).map_err(|_| HashError::InvalidHex)?;
    let got = bytes.len();
    bytes.try_into().map_err(|_| HashError::InvalidLength { got })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_hash_known_vector() {
        // sha256("true")
        assert_eq!(
            to_hex(&hash_leaf("true")),
            "b5bea41b6c623f7c09f1bf24dcae58ebab3c0cdd90ad966bc43a45b44867e12b"
        );
    }

    #[test]
    fn test_leaf_hash_determinism() {
        assert_eq!(hash_leaf(encode_bool(false)), hash_leaf("false"));
        assert_ne!(hash_leaf("true"), hash_leaf("false"));
    }

    #[test]
    fn test_node_hash_is_over_hex_text() {
        let left = hash_leaf("a");
        let right = hash_leaf("b");

        let concatenated = format!("{}{}", to_hex(&left), to_hex(&right));
        assert_eq!(hash_nodes(&left, &right), hash_leaf(&concatenated));
    }

    #[test]
    fn test_node_hash_order_matters() {
        let a = hash_leaf("a");
        let b = hash_leaf("b");
        assert_ne!(hash_nodes(&a, &b), hash_nodes(&b, &a));
    }

    #[test]
    fn test_hex_output_shape() {
        let hex = to_hex(&hash_leaf("x"));
        assert_eq!(hex.len(), DIGEST_HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_parse_digest() {
        let digest = hash_leaf("x");
        assert_eq!(parse_digest(&to_hex(&digest)), Ok(digest));
        assert_eq!(parse_digest(&to_hex(&digest).to_uppercase()), Ok(digest));
        assert_eq!(parse_digest("zz"), Err(HashError::InvalidHex));
        assert_eq!(parse_digest("abcd"), Err(HashError::InvalidLength { got: 2 }));
    }
}
