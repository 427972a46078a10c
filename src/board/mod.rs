//! Board commitments.
//!
//! `grid` holds the immutable board; `generator` maps its coordinates onto
//! Merkle leaves and serves per-cell proofs.

pub mod grid;
pub mod generator;

pub use grid::{Board, BoardError, Field};
pub use generator::Generator;
