//! Proof Generator
//!
//! Binds a board to the Merkle tree built over its row-major cells and
//! answers proof requests by coordinate.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::board::grid::{Board, BoardError, Field};
use crate::core::hash::encode_bool;
use crate::proof::export::ProofExport;
use crate::proof::merkle::{MerkleProof, MerkleTree};
use crate::proof::step::ProofStep;

/// Board plus its commitment tree. Immutable once built.
#[derive(Clone, Debug)]
pub struct Generator {
    board: Board,
    /// Coordinate to leaf position, in flattening order.
    index: BTreeMap<Field, usize>,
    tree: MerkleTree,
}

impl Generator {
    /// Flatten the board and build its tree.
    pub fn new(board: Board) -> Self {
        let mut index = BTreeMap::new();
        let mut values = Vec::with_capacity(board.cell_count());

        for (field, value) in board.cells() {
            index.insert(field, values.len());
            values.push(encode_bool(value));
        }

        let tree = MerkleTree::new(&values);
        debug!(
            rows = board.rows(),
            columns = board.columns(),
            cells = values.len(),
            "Built board generator"
        );

        Self { board, index, tree }
    }

    /// The committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The underlying tree.
    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// Root commitment as hex, `None` for an empty board.
    pub fn root_hex(&self) -> Option<String> {
        self.tree.root_hex()
    }

    /// Leaf position of a coordinate.
    pub fn leaf_index(&self, field: Field) -> Result<usize, BoardError> {
        self.index.get(&field).copied().ok_or_else(|| {
            warn!("Unknown field {}", field);
            BoardError::unknown(field)
        })
    }

    /// Generate the inclusion proof for a cell.
    pub fn generate_proof(&self, field: Field) -> Result<MerkleProof, BoardError> {
        let index = self.leaf_index(field)?;
        self.tree
            .generate_proof(index)
            .ok_or_else(|| BoardError::unknown(field))
    }

    /// Verify a proof against the board's own value at `field`.
    ///
    /// The preimage is recomputed from the board, never taken from the caller.
    pub fn verify_proof(&self, field: Field, proof: &[ProofStep]) -> Result<bool, BoardError> {
        self.leaf_index(field)?;
        let value = self.board.get(field).ok_or_else(|| BoardError::unknown(field))?;
        Ok(self.tree.verify_proof(encode_bool(value), proof))
    }

    /// Bundle a cell proof with the root for submission.
    pub fn export_proof(&self, field: Field) -> Result<ProofExport, BoardError> {
        let proof = self.generate_proof(field)?;
        let value = self.board.get(field).ok_or_else(|| BoardError::unknown(field))?;
        // A cell exists only on a non-empty board, which always has a root
        let root = self.root_hex().ok_or_else(|| BoardError::unknown(field))?;

        Ok(ProofExport {
            root,
            field,
            value,
            preimage: proof.preimage,
            proof: proof.steps,
        })
    }
}
