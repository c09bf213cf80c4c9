//! Document model for paperkit
//!
//! Provides the [`Document`] trait that rendering code targets, the
//! vocabulary types it is expressed in ([`Alignment`], [`CellMargins`],
//! [`Color`], the content handles), and [`MemoryDocument`], an
//! in-memory backend that records everything written to it.
//!
//! # Examples
//!
//! ## Writing a paragraph
//!
//! ```
//! use paperkit_document::{Alignment, Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let paragraph = doc.add_paragraph();
//! doc.set_alignment(paragraph, Alignment::Center).unwrap();
//! let run = doc.add_run(paragraph).unwrap();
//! doc.set_run_text(run, "Quarterly report").unwrap();
//!
//! assert_eq!(doc.paragraph_text(paragraph).unwrap(), "Quarterly report");
//! ```
//!
//! ## Writing into a table cell
//!
//! ```
//! use paperkit_document::{Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let table = doc.add_table(2, 2).unwrap();
//! let paragraph = doc.cell_paragraph(table, 0, 0).unwrap();
//! let run = doc.add_run(paragraph).unwrap();
//! doc.set_run_text(run, "top left").unwrap();
//!
//! assert_eq!(doc.cell_text(table, 0, 0).unwrap(), "top left");
//! ```
//!
//! ## Styling a run
//!
//! ```
//! use paperkit_document::{Alignment, Color, Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let run = doc.append_run(Alignment::Right);
//! doc.set_run_text(run, "warning").unwrap();
//!
//! let styles = doc.run_styles(run).unwrap();
//! styles.set_bold(true);
//! styles.set_color(Color::from_hex("CC0000").unwrap());
//! ```

pub mod color;
pub mod error;
pub mod memory;
pub mod model;

pub use color::Color;
pub use error::{DocumentError, Result};
pub use memory::{Block, Cell, MemoryDocument, Paragraph, Run, RunProperties, Table};
pub use model::{Alignment, CellMargins, Document, ParagraphId, RunId, RunStyles, TableId};
