//! Reading hand tables and projecting them onto chart series.
//!
//! A table is a header delimited text file. Every data line becomes a
//! [`Row`]: a map from column name to the raw text of the cell. Nothing
//! is parsed or validated beyond the shape of the table itself.

use thiserror::Error;

mod loader;
mod projector;

pub use loader::{Row, load_rows, read_rows};
pub use projector::{HAND_COLUMN, Projection, SCORE_COLUMN, hand_label, project, project_columns};

/// Errors from loading, projecting or writing a table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row} has no `{field}` column")]
    MissingField { row: usize, field: String },
}
