//! Core deterministic primitives.
//!
//! Stateless hashing shared by the tree, the verifier and the generator.

pub mod hash;

// Re-export core types
pub use hash::{Digest, HashError, encode_bool, hash_leaf, hash_nodes, parse_digest, to_hex};
