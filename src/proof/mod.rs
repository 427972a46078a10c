//! Inclusion Proof System
//!
//! Commit to an ordered list of values and prove single entries without
//! revealing the rest.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  merkle.rs       - Arena-backed binary Merkle tree          │
//! │  step.rs         - Proof steps and root-only verification   │
//! │  export.rs       - Serializable proof bundle                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod merkle;
pub mod step;
pub mod export;

// Re-export key types
pub use merkle::{MerkleTree, MerkleProof, NodeId};
pub use step::{ProofStep, compute_root, verify_with_root, verify_commitment};
pub use export::ProofExport;
