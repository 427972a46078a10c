//! Driver Configuration
//!
//! Read from environment variables:
//! - `BOARD_FILE`: player file holding the board (default `board.json`)
//! - `PROVE_ROW` / `PROVE_COLUMN`: optional cell to prove
//! - `RUST_LOG`: log filter (default `info`)

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::board::{Board, Field};

/// Default board file path.
pub const DEFAULT_BOARD_FILE: &str = "board.json";

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Driver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverConfig {
    /// Path to the player file.
    pub board_file: PathBuf,
    /// Cell to prove, if any.
    pub field: Option<Field>,
    /// tracing-subscriber filter directive.
    pub log_filter: String,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            board_file: PathBuf::from(DEFAULT_BOARD_FILE),
            field: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A coordinate variable is not a non-negative integer.
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidCoordinate {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
    /// Only one of row / column was given.
    #[error("PROVE_ROW and PROVE_COLUMN must be set together")]
    PartialField,
}

impl ProverConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let row = parse_coordinate("PROVE_ROW", lookup("PROVE_ROW"))?;
        let column = parse_coordinate("PROVE_COLUMN", lookup("PROVE_COLUMN"))?;

        let field = match (row, column) {
            (Some(row), Some(column)) => Some(Field::new(row, column)),
            (None, None) => None,
            _ => return Err(ConfigError::PartialField),
        };

        Ok(Self {
            board_file: lookup("BOARD_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOARD_FILE)),
            field,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_coordinate(name: &'static str, raw: Option<String>) -> Result<Option<usize>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidCoordinate { name, value: value.clone() })
    })
    .transpose()
}

/// Player file. Only the board is used here; the other fields belong to the
/// caller that registers the commitment.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerBoardFile {
    /// Player address, if present.
    #[serde(default)]
    pub address: Option<String>,
    /// Stake amount, if present.
    #[serde(default)]
    pub stake: Option<String>,
    /// Board rows.
    pub board: Board,
}

impl PlayerBoardFile {
    /// Parse from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProverConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ProverConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = ProverConfig::from_lookup(lookup(&[
            ("BOARD_FILE", "alice.json"),
            ("PROVE_ROW", "2"),
            ("PROVE_COLUMN", " 1 "),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.board_file, PathBuf::from("alice.json"));
        assert_eq!(config.field, Some(Field::new(2, 1)));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_partial_field() {
        let err = ProverConfig::from_lookup(lookup(&[("PROVE_ROW", "1")])).unwrap_err();
        assert_eq!(err, ConfigError::PartialField);
    }

    #[test]
    fn test_invalid_coordinate() {
        let err = ProverConfig::from_lookup(lookup(&[("PROVE_ROW", "-1"), ("PROVE_COLUMN", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoordinate { name: "PROVE_ROW", .. }));
    }

    #[test]
    fn test_player_file() {
        let file = PlayerBoardFile::from_json(
            r#"{"address":"wasm1abc","stake":"100","board":[[true,false],[false,true]]}"#,
        )
        .unwrap();

        assert_eq!(file.address.as_deref(), Some("wasm1abc"));
        assert_eq!(file.board.occupied_count(), 2);
    }

    #[test]
    fn test_player_file_ragged_board() {
        assert!(PlayerBoardFile::from_json(r#"{"board":[[true],[true,false]]}"#).is_err());
    }
}
