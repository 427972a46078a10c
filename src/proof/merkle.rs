//! Merkle Tree Commitments
//!
//! Binary Merkle tree using SHA-256 over an ordered list of string values.
//! Nodes live in an arena and are addressed by index. Each node records its
//! parent and the sibling it was paired with, so proofs are produced by
//! walking from a leaf up to the root.
//!
//! Odd levels are padded by pairing the last node with itself (same index,
//! no new node). A single value is its own root.

use std::fmt;

use tracing::debug;

use crate::core::hash::{hash_leaf, hash_nodes, to_hex, Digest};
use crate::proof::step::{verify_with_root, ProofStep};

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// One tree vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    digest: Digest,
    /// Set once when the node is paired; `None` for the root.
    parent: Option<NodeId>,
    /// Sibling paired on the left of this node.
    left: Option<NodeId>,
    /// Sibling paired on the right of this node (itself when padded).
    right: Option<NodeId>,
}

impl Node {
    fn new(digest: Digest) -> Self {
        Self {
            digest,
            parent: None,
            left: None,
            right: None,
        }
    }
}

/// Binary Merkle tree for commitment generation.
///
/// Immutable after construction; safe to share across threads for proof
/// generation and verification.
#[derive(Clone, Debug, Default)]
pub struct MerkleTree {
    /// Original preimages, one per leaf.
    values: Vec<String>,
    /// Node arena (leaves first, in input order).
    nodes: Vec<Node>,
    /// Padded levels, leaves at index 0 and root at the last index.
    levels: Vec<Vec<NodeId>>,
    /// Root node, `None` for an empty tree.
    root: Option<NodeId>,
}

/// Merkle inclusion proof for one leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    /// Index of the leaf this proof is for.
    pub leaf_index: usize,
    /// The leaf's original value, re-hashed by the verifier.
    pub preimage: String,
    /// Sibling steps from the leaf level upward.
    pub steps: Vec<ProofStep>,
}

impl MerkleTree {
    /// Build a tree from values in order.
    pub fn new<T: AsRef<str>>(values: &[T]) -> Self {
        let values: Vec<String> = values.iter().map(|v| v.as_ref().to_owned()).collect();

        let nodes: Vec<Node> = values.iter().map(|v| Node::new(hash_leaf(v))).collect();

        let mut tree = Self {
            values,
            nodes,
            levels: Vec::new(),
            root: None,
        };
        tree.build();
        tree
    }

    /// Pair nodes level by level until one remains.
    fn build(&mut self) {
        if self.nodes.is_empty() {
            debug!("Built empty merkle tree");
            return;
        }

        let mut level: Vec<NodeId> = (0..self.nodes.len()).collect();

        while level.len() > 1 {
            if level.len() % 2 != 0 {
                let last = level[level.len() - 1];
                level.push(last);
            }

            let mut next_level = Vec::with_capacity(level.len() / 2);

            for pair in level.chunks_exact(2) {
                let (left, right) = (pair[0], pair[1]);
                let digest = hash_nodes(&self.nodes[left].digest, &self.nodes[right].digest);

                let parent = self.nodes.len();
                self.nodes.push(Node::new(digest));

                self.nodes[left].parent = Some(parent);
                self.nodes[right].parent = Some(parent);

                if left == right {
                    self.nodes[left].right = Some(left);
                } else {
                    self.nodes[left].right = Some(right);
                    self.nodes[right].left = Some(left);
                }

                next_level.push(parent);
            }

            self.levels.push(level);
            level = next_level;
        }

        self.root = level.first().copied();
        self.levels.push(level);

        debug!(
            leaves = self.values.len(),
            height = self.height(),
            root = %self.root_hex().unwrap_or_default(),
            "Built merkle tree"
        );
    }

    /// Root digest, `None` for an empty tree.
    pub fn root(&self) -> Option<Digest> {
        self.root.map(|id| self.nodes[id].digest)
    }

    /// Root digest as lowercase hex, `None` for an empty tree.
    pub fn root_hex(&self) -> Option<String> {
        self.root().map(|digest| to_hex(&digest))
    }

    /// Number of leaves (before padding).
    pub fn leaf_count(&self) -> usize {
        self.values.len()
    }

    /// Check if the tree has no leaves.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of proof steps from any leaf to the root.
    pub fn height(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Original value at a leaf index.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Generate an inclusion proof for the leaf at `index`.
    ///
    /// Returns None if index is out of bounds.
    pub fn generate_proof(&self, index: usize) -> Option<MerkleProof> {
        let preimage = self.values.get(index)?.clone();

        let mut steps = Vec::with_capacity(self.height());
        let mut current = index;

        // Walk up the tree, collecting one sibling per level
        while let Some(parent) = self.nodes[current].parent {
            let node = &self.nodes[current];
            if let Some(left) = node.left {
                steps.push(ProofStep::left(self.nodes[left].digest));
            } else if let Some(right) = node.right {
                steps.push(ProofStep::right(self.nodes[right].digest));
            }
            current = parent;
        }

        debug!(index, steps = steps.len(), "Generated merkle proof");

        Some(MerkleProof {
            leaf_index: index,
            preimage,
            steps,
        })
    }

    /// Verify a proof for `value` against this tree's root.
    ///
    /// An empty tree has no root and never verifies.
    pub fn verify_proof(&self, value: &str, proof: &[ProofStep]) -> bool {
        match self.root() {
            Some(root) => verify_with_root(&root, value, proof),
            None => false,
        }
    }
}

impl fmt::Display for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Merkle tree is empty");
        }

        for (depth, level) in self.levels.iter().rev().enumerate() {
            writeln!(f, "Level {}:", depth)?;
            let mut previous = None;
            for &id in level {
                // Padding repeats the last id
                if previous == Some(id) {
                    continue;
                }
                writeln!(f, "  {}", to_hex(&self.nodes[id].digest))?;
                previous = Some(id);
            }
        }

        Ok(())
    }
}
