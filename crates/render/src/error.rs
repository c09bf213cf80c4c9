use paperkit_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while rendering into a document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid table dimensions: {rows} rows, {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Broadcast source is empty: {field}")]
    EmptyBroadcast { field: &'static str },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
