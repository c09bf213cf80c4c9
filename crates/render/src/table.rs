use paperkit_document::{Alignment, CellMargins};
use serde::{Deserialize, Serialize};

use crate::style::{StyleMap, StyleValue};

/// Default row height in twips when none is given.
pub const DEFAULT_ROW_HEIGHT: u32 = 240;

/// Default cell width in twips when none is given.
pub const DEFAULT_CELL_WIDTH: u32 = 1440;

/// Everything needed to render one table.
///
/// The sizing and alignment vectors broadcast: indices past the end of
/// a vector reuse its last element, so one-element vectors configure
/// the whole table. Note the granularities differ. `row_heights`
/// broadcasts per row and `col_widths` per column, but `alignments`
/// broadcasts at the flattened cell index `row * cols + col`, so a
/// two-element alignment vector does not mean "two columns".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Declared number of rows.
    pub rows: usize,
    /// Declared number of columns.
    pub cols: usize,
    /// Cell text, row-major. May supply fewer rows than `rows`, and
    /// rows may supply fewer values than `cols`; missing positions are
    /// left unwritten.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
    /// Per-cell alignments at the flattened index, broadcast.
    #[serde(default = "default_alignments")]
    pub alignments: Vec<Alignment>,
    /// Per-row heights in twips, broadcast.
    #[serde(default = "default_row_heights")]
    pub row_heights: Vec<u32>,
    /// Per-column widths in twips, broadcast.
    #[serde(default = "default_col_widths")]
    pub col_widths: Vec<u32>,
    /// Table-wide cell margins. When absent, no margins are written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<CellMargins>,
    /// Style properties dispatched onto every written run. When
    /// absent, no style dispatch occurs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
}

fn default_alignments() -> Vec<Alignment> {
    vec![Alignment::default()]
}

fn default_row_heights() -> Vec<u32> {
    vec![DEFAULT_ROW_HEIGHT]
}

fn default_col_widths() -> Vec<u32> {
    vec![DEFAULT_CELL_WIDTH]
}

impl TableSpec {
    /// Create a table spec with default sizing and alignment.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        TableSpec {
            rows,
            cols,
            values: Vec::new(),
            alignments: default_alignments(),
            row_heights: default_row_heights(),
            col_widths: default_col_widths(),
            margins: None,
            styles: None,
        }
    }

    /// Set the cell text grid.
    #[must_use]
    pub fn with_values<S: Into<String>>(mut self, values: Vec<Vec<S>>) -> Self {
        self.values = values
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    /// Use one alignment for every cell.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignments = vec![alignment];
        self
    }

    /// Set per-cell alignments at the flattened index, broadcast.
    #[must_use]
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Use one height for every row.
    #[must_use]
    pub fn with_row_height(mut self, height: u32) -> Self {
        self.row_heights = vec![height];
        self
    }

    /// Set per-row heights, broadcast.
    #[must_use]
    pub fn with_row_heights(mut self, heights: Vec<u32>) -> Self {
        self.row_heights = heights;
        self
    }

    /// Use one width for every column.
    #[must_use]
    pub fn with_col_width(mut self, width: u32) -> Self {
        self.col_widths = vec![width];
        self
    }

    /// Set per-column widths, broadcast.
    #[must_use]
    pub fn with_col_widths(mut self, widths: Vec<u32>) -> Self {
        self.col_widths = widths;
        self
    }

    /// Set table-wide cell margins.
    #[must_use]
    pub fn with_margins(mut self, margins: CellMargins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Add one style property, keeping any already added.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles
            .get_or_insert_with(StyleMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the whole style map.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = Some(styles);
        self
    }
}
