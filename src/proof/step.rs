//! Proof Steps
//!
//! A proof is the ordered list of sibling digests from the leaf level up to
//! the level just below the root. Step order and the `is_left` flag are the
//! only bit-exact contract with external verifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::hash::{encode_bool, hash_leaf, hash_nodes, parse_digest, to_hex, Digest};

/// One level of an inclusion proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Digest of the sibling at this level (hex on the wire).
    #[serde(serialize_with = "serialize_digest", deserialize_with = "deserialize_digest")]
    pub hash: Digest,
    /// True if the sibling sits to the left of the node being proved.
    pub is_left: bool,
}

impl ProofStep {
    /// Sibling on the left.
    pub fn left(hash: Digest) -> Self {
        Self { hash, is_left: true }
    }

    /// Sibling on the right.
    pub fn right(hash: Digest) -> Self {
        Self { hash, is_left: false }
    }

    /// Combine this step with the digest accumulated so far.
    #[inline]
    pub fn apply(&self, current: &Digest) -> Digest {
        if self.is_left {
            hash_nodes(&self.hash, current)
        } else {
            hash_nodes(current, &self.hash)
        }
    }
}

/// Recompute the root implied by a preimage and its proof.
pub fn compute_root(value: &str, proof: &[ProofStep]) -> Digest {
    proof
        .iter()
        .fold(hash_leaf(value), |current, step| step.apply(&current))
}

/// Check a proof knowing only the root digest.
pub fn verify_with_root(root: &Digest, value: &str, proof: &[ProofStep]) -> bool {
    compute_root(value, proof) == *root
}

/// Check a boolean cell against a published hex root commitment.
///
/// An unparsable root never verifies.
pub fn verify_commitment(root_hex: &str, value: bool, proof: &[ProofStep]) -> bool {
    match parse_digest(root_hex) {
        Ok(root) => verify_with_root(&root, encode_bool(value), proof),
        Err(_) => false,
    }
}

fn serialize_digest<S: Serializer>(digest: &Digest, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(digest))
}

fn deserialize_digest<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Digest, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_digest(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_proof_is_leaf_hash() {
        assert_eq!(compute_root("true", &[]), hash_leaf("true"));
    }

    #[test]
    fn test_step_orientation() {
        let leaf = hash_leaf("a");
        let sibling = hash_leaf("b");

        assert_eq!(ProofStep::right(sibling).apply(&leaf), hash_nodes(&leaf, &sibling));
        assert_eq!(ProofStep::left(sibling).apply(&leaf), hash_nodes(&sibling, &leaf));
    }

    #[test]
    fn test_verify_commitment_bad_root() {
        assert!(!verify_commitment("not hex", true, &[]));
        assert!(!verify_commitment("abcd", true, &[]));
    }

    #[test]
    fn test_verify_commitment_single_leaf() {
        let root = to_hex(&hash_leaf("false"));
        assert!(verify_commitment(&root, false, &[]));
        assert!(!verify_commitment(&root, true, &[]));
    }

    #[test]
    fn test_json_shape() {
        let step = ProofStep::left(hash_leaf("true"));
        let json = serde_json::to_value(step).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "hash": "b5bea41b6c623f7c09f1bf24dcae58ebab3c0cdd90ad966bc43a45b44867e12b",
                "is_left": true,
            })
        );

        let back: ProofStep = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_json_rejects_short_hash() {
        let json = r#"{"hash":"abcd","is_left":false}"#;
        assert!(serde_json::from_str::<ProofStep>(json).is_err());
    }
}
