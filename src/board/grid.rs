//! Board Grid
//!
//! Immutable rectangular grid of occupied / empty cells.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Row index.
    pub row: usize,
    /// Column index within the row.
    pub column: usize,
}

impl Field {
    /// Create a new coordinate.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Board errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Rows have different lengths.
    #[error("invalid board shape: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// First offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },
    /// Coordinate is not on the board.
    #[error("field not found: ({row}, {column})")]
    UnknownField {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

impl BoardError {
    pub(crate) fn unknown(field: Field) -> Self {
        Self::UnknownField {
            row: field.row,
            column: field.column,
        }
    }
}

/// Immutable rectangular board.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    fields: Vec<Vec<bool>>,
}

impl Board {
    /// Create a board, rejecting ragged rows.
    pub fn new(fields: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        if let Some(first) = fields.first() {
            let expected = first.len();
            if let Some((row, cells)) = fields
                .iter()
                .enumerate()
                .find(|(_, cells)| cells.len() != expected)
            {
                return Err(BoardError::RaggedRows {
                    row,
                    expected,
                    got: cells.len(),
                });
            }
        }

        Ok(Self { fields })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.fields.len()
    }

    /// Number of columns (0 for an empty board).
    pub fn columns(&self) -> usize {
        self.fields.first().map_or(0, Vec::len)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.fields.iter().flatten().filter(|cell| **cell).count()
    }

    /// Value at a coordinate.
    pub fn get(&self, field: Field) -> Option<bool> {
        self.fields.get(field.row)?.get(field.column).copied()
    }

    /// Cells in row-major order, paired with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.fields.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, value)| (Field::new(row, column), *value))
        })
    }

    /// Row-major cell values.
    pub fn flatten(&self) -> Vec<bool> {
        self.cells().map(|(_, value)| value).collect()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = Vec::<Vec<bool>>::deserialize(deserializer)?;
        Board::new(fields).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.fields {
            let line: Vec<&str> = cells.iter().map(|c| if *c { "X" } else { "." }).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
