use thiserror::Error;

/// Errors that can occur during document operations
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unknown paragraph: {index}")]
    UnknownParagraph { index: usize },

    #[error("Unknown run: {index}")]
    UnknownRun { index: usize },

    #[error("Unknown table: {index}")]
    UnknownTable { index: usize },

    #[error("Cell out of bounds: row {row}, col {col} (table has {rows} rows, {cols} cols)")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Row index out of bounds: {index} (table has {count} rows)")]
    RowOutOfBounds { index: usize, count: usize },

    #[error("Invalid table dimensions: {rows} rows, {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Invalid color: {value}")]
    InvalidColor { value: String },
}

pub type Result<T> = std::result::Result<T, DocumentError>;
