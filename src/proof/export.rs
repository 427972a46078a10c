//! Proof Export
//!
//! Self-contained bundle handed to whatever submits a move: the published
//! root, the proved cell, its value and the ordered proof steps.

use serde::{Deserialize, Serialize};

use crate::board::grid::Field;
use crate::core::hash::encode_bool;
use crate::proof::step::{verify_commitment, ProofStep};

/// A cell proof ready for serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofExport {
    /// Root commitment (lowercase hex).
    pub root: String,
    /// Proved cell.
    pub field: Field,
    /// Cell value.
    pub value: bool,
    /// Leaf preimage (`"true"` / `"false"`).
    pub preimage: String,
    /// Sibling steps, leaf level first.
    pub proof: Vec<ProofStep>,
}

impl ProofExport {
    /// Re-check the bundle against its own root.
    ///
    /// The preimage must be the canonical encoding of `value`.
    pub fn verify(&self) -> bool {
        self.preimage == encode_bool(self.value)
            && verify_commitment(&self.root, self.value, &self.proof)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Generator};

    fn sample_export() -> ProofExport {
        let board = Board::new(vec![vec![true, false], vec![false, false]]).unwrap();
        let generator = Generator::new(board);
        generator.export_proof(Field::new(0, 0)).unwrap()
    }

    #[test]
    fn test_export_verifies() {
        let export = sample_export();
        assert!(export.value);
        assert_eq!(export.preimage, "true");
        assert!(export.verify());
    }

    #[test]
    fn test_export_wrong_value_fails() {
        let mut export = sample_export();
        export.value = false;
        assert!(!export.verify());
    }

    #[test]
    fn test_export_preimage_must_match_value() {
        let mut export = sample_export();
        export.preimage = "false".to_string();
        assert!(!export.verify());

        export.preimage = "TRUE".to_string();
        assert!(!export.verify());
    }

    #[test]
    fn test_export_json_round_trip() {
        let export = sample_export();
        let json = export.to_json().unwrap();

        assert!(json.contains("\"is_left\": false"));
        assert!(json.contains("\"row\": 0"));

        let back: ProofExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, export);
        assert!(back.verify());
    }
}
