use paperkit_document::{Document, TableId};

use crate::broadcast::broadcast;
use crate::error::{RenderError, Result};
use crate::style::{StyleError, StyleRegistry};
use crate::table::TableSpec;

/// One style property that failed to apply during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFailure {
    pub row: usize,
    pub col: usize,
    pub property: String,
    pub error: StyleError,
}

/// Outcome of a table render.
#[derive(Debug)]
pub struct RenderReport {
    /// Handle to the table that was created.
    pub table: TableId,
    /// Number of rows that received values. Less than the declared row
    /// count when the value grid under-supplies rows.
    pub rows_filled: usize,
    /// Style properties that could not be applied, in encounter order.
    pub style_failures: Vec<StyleFailure>,
}

impl RenderReport {
    /// Check whether every style property applied cleanly
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.style_failures.is_empty()
    }

    /// Names of failed properties, deduplicated, in encounter order
    #[must_use]
    pub fn failed_properties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for failure in &self.style_failures {
            if !names.contains(&failure.property.as_str()) {
                names.push(&failure.property);
            }
        }
        names
    }
}

/// Renders [`TableSpec`]s into any [`Document`].
///
/// The renderer itself is stateless apart from its style registry, so
/// one instance can render any number of tables into any number of
/// documents.
///
/// # Examples
///
/// ```
/// use paperkit_document::MemoryDocument;
/// use paperkit_render::{TableRenderer, TableSpec};
///
/// let renderer = TableRenderer::new();
/// let mut doc = MemoryDocument::new();
///
/// let spec = TableSpec::new(2, 2)
///     .with_values(vec![vec!["name", "total"], vec!["widgets", "12"]])
///     .with_style("bold", true);
///
/// let report = renderer.render(&mut doc, &spec).unwrap();
/// assert!(report.is_clean());
/// assert_eq!(doc.cell_text(report.table, 1, 0).unwrap(), "widgets");
/// ```
#[derive(Debug)]
pub struct TableRenderer {
    styles: StyleRegistry,
}

impl TableRenderer {
    /// Create a renderer with the default style registry.
    #[must_use]
    pub fn new() -> Self {
        TableRenderer {
            styles: StyleRegistry::default(),
        }
    }

    /// Create a renderer with a custom style registry.
    #[must_use]
    pub fn with_registry(styles: StyleRegistry) -> Self {
        TableRenderer { styles }
    }

    /// Get the style registry
    #[must_use]
    pub fn registry(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Get the style registry mutably, for registering extra properties
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Render a table into a document.
    ///
    /// Inserts a blank separator paragraph, creates the declared
    /// `rows` x `cols` table shell, then fills cells bounded by what
    /// the value grid actually supplies. Positions the grid does not
    /// cover stay empty, with no sizing or alignment written. Style
    /// failures never abort the render; they come back in the report.
    ///
    /// Configuration is validated before the document is touched, so
    /// an `Err` from validation means the document is unchanged.
    pub fn render<D: Document>(&self, document: &mut D, spec: &TableSpec) -> Result<RenderReport> {
        validate(spec)?;

        document.add_paragraph();
        let table = document.add_table(spec.rows, spec.cols)?;

        if let Some(margins) = spec.margins {
            document.set_cell_margins(table, margins)?;
        }

        let mut style_failures = Vec::new();
        let rows_filled = spec.rows.min(spec.values.len());
        for (i, row_values) in spec.values.iter().take(spec.rows).enumerate() {
            document.set_row_height(table, i, *broadcast(&spec.row_heights, i))?;

            for (j, value) in row_values.iter().take(spec.cols).enumerate() {
                document.set_cell_width(table, i, j, *broadcast(&spec.col_widths, j))?;

                let paragraph = document.cell_paragraph(table, i, j)?;
                let alignment = *broadcast(&spec.alignments, i * spec.cols + j);
                document.set_alignment(paragraph, alignment)?;

                let run = document.add_run(paragraph)?;
                document.set_run_text(run, value)?;

                if let Some(map) = &spec.styles {
                    let run_styles = document.run_styles(run)?;
                    for (property, error) in self.styles.apply_all(run_styles, map) {
                        style_failures.push(StyleFailure {
                            row: i,
                            col: j,
                            property,
                            error,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            "Rendered table: {}x{} declared, {} rows filled, {} style failures",
            spec.rows,
            spec.cols,
            rows_filled,
            style_failures.len()
        );

        Ok(RenderReport {
            table,
            rows_filled,
            style_failures,
        })
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        TableRenderer::new()
    }
}

fn validate(spec: &TableSpec) -> Result<()> {
    if spec.rows == 0 || spec.cols == 0 {
        return Err(RenderError::InvalidDimensions {
            rows: spec.rows,
            cols: spec.cols,
        });
    }
    if spec.alignments.is_empty() {
        return Err(RenderError::EmptyBroadcast {
            field: "alignments",
        });
    }
    if spec.row_heights.is_empty() {
        return Err(RenderError::EmptyBroadcast {
            field: "row_heights",
        });
    }
    if spec.col_widths.is_empty() {
        return Err(RenderError::EmptyBroadcast {
            field: "col_widths",
        });
    }
    Ok(())
}
