//! # Board Proof
//!
//! Merkle commitments over hidden game boards, with per-cell inclusion proofs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BOARD PROOF                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Stateless primitives                     │
//! │  └── hash.rs     - SHA-256 leaf/node hashing, hex digests   │
//! │                                                             │
//! │  board/          - Committed data                           │
//! │  ├── grid.rs     - Immutable rectangular board              │
//! │  └── generator.rs- Coordinate index and per-cell proofs     │
//! │                                                             │
//! │  proof/          - Commitment tree                          │
//! │  ├── merkle.rs   - Arena-backed binary Merkle tree          │
//! │  ├── step.rs     - Proof steps, root-only verification      │
//! │  └── export.rs   - Serializable proof bundle                │
//! │                                                             │
//! │  config.rs       - Driver configuration (environment)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! Board → row-major `"true"`/`"false"` leaves → [`MerkleTree`] → root
//! published as a commitment. For each move the [`Generator`] produces the
//! proof for one cell; anyone holding only the root can check it with
//! [`verify_commitment`].
//!
//! Everything here is synchronous in-memory computation. Built trees are
//! immutable, so concurrent reads are safe.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod board;
pub mod proof;
pub mod config;

// Re-export commonly used types
pub use crate::core::hash::{Digest, HashError};
pub use board::{Board, BoardError, Field, Generator};
pub use proof::{MerkleTree, MerkleProof, ProofStep, ProofExport, verify_commitment, verify_with_root};
pub use config::{ProverConfig, ConfigError, PlayerBoardFile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
