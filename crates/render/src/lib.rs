//! Table and paragraph rendering for paperkit
//!
//! Takes a [`TableSpec`] (cell values plus sparse visual
//! configuration) and renders it into any [`Document`] backend. Sizing
//! and alignment vectors broadcast across the grid, and named style
//! properties are dispatched through a [`StyleRegistry`] so a bad
//! property never aborts a render.
//!
//! # Examples
//!
//! ## Rendering a table
//!
//! ```
//! use paperkit_document::{Alignment, MemoryDocument};
//! use paperkit_render::{TableRenderer, TableSpec};
//!
//! let mut doc = MemoryDocument::new();
//! let renderer = TableRenderer::new();
//!
//! let spec = TableSpec::new(2, 3)
//!     .with_values(vec![
//!         vec!["Region", "Q1", "Q2"],
//!         vec!["North", "410", "380"],
//!     ])
//!     .with_alignment(Alignment::Center)
//!     .with_row_height(320)
//!     .with_col_widths(vec![2000, 1200, 1200]);
//!
//! let report = renderer.render(&mut doc, &spec).unwrap();
//! assert_eq!(report.rows_filled, 2);
//! assert_eq!(doc.cell_text(report.table, 0, 0).unwrap(), "Region");
//! ```
//!
//! ## Observing style failures
//!
//! ```
//! use paperkit_document::MemoryDocument;
//! use paperkit_render::{TableRenderer, TableSpec};
//!
//! let mut doc = MemoryDocument::new();
//! let renderer = TableRenderer::new();
//!
//! let spec = TableSpec::new(1, 1)
//!     .with_values(vec![vec!["x"]])
//!     .with_style("bold", true)
//!     .with_style("sparkle", 5_i64);
//!
//! let report = renderer.render(&mut doc, &spec).unwrap();
//! assert_eq!(report.failed_properties(), vec!["sparkle"]);
//! ```
//!
//! # Broadcast Semantics
//!
//! `row_heights`, `col_widths`, and `alignments` may be shorter than
//! the run of positions they configure; positions past the end reuse
//! the last element. Heights broadcast per row and widths per column,
//! while alignments broadcast at the flattened index `row * cols +
//! col`. Empty vectors are rejected before any document mutation.

pub mod broadcast;
pub mod error;
pub mod paragraph;
pub mod render;
pub mod style;
pub mod table;

pub use broadcast::broadcast;
pub use error::{RenderError, Result};
pub use paragraph::{aligned_run, write_line};
pub use render::{RenderReport, StyleFailure, TableRenderer};
pub use style::{StyleError, StyleMap, StyleRegistry, StyleValue};
pub use table::{TableSpec, DEFAULT_CELL_WIDTH, DEFAULT_ROW_HEIGHT};

pub use paperkit_document::Document;
