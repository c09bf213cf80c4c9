use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;

/// Paragraph alignment within the page or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Both,
    Distribute,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Left
    }
}

/// Interior padding for every cell of a table, in twips.
///
/// A margin that is not given stays at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellMargins {
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub bottom: u32,
    #[serde(default)]
    pub right: u32,
}

impl CellMargins {
    /// Create margins from individual sides.
    #[must_use]
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        CellMargins {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create margins with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        CellMargins::new(value, value, value, value)
    }

    #[must_use]
    pub fn with_top(mut self, value: u32) -> Self {
        self.top = value;
        self
    }

    #[must_use]
    pub fn with_left(mut self, value: u32) -> Self {
        self.left = value;
        self
    }

    #[must_use]
    pub fn with_bottom(mut self, value: u32) -> Self {
        self.bottom = value;
        self
    }

    #[must_use]
    pub fn with_right(mut self, value: u32) -> Self {
        self.right = value;
        self
    }
}

/// Handle to a paragraph inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParagraphId(pub usize);

/// Handle to a text run inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub usize);

/// Handle to a table inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub usize);

/// Named character-level properties of a text run.
///
/// Each setter corresponds to one property a style map can address by
/// name: `bold` maps to [`set_bold`](RunStyles::set_bold), `font_size`
/// to [`set_font_size`](RunStyles::set_font_size), and so on.
pub trait RunStyles {
    fn set_bold(&mut self, value: bool);
    fn set_italic(&mut self, value: bool);
    fn set_underline(&mut self, value: bool);
    fn set_strike_through(&mut self, value: bool);
    fn set_small_caps(&mut self, value: bool);
    /// Font size in half-points.
    fn set_font_size(&mut self, value: u32);
    fn set_font_family(&mut self, value: &str);
    fn set_color(&mut self, value: Color);
    fn set_highlight(&mut self, value: Color);
    /// Extra spacing between characters, in twips. May be negative.
    fn set_character_spacing(&mut self, value: i32);
}

/// A document that paragraphs, runs, and tables can be appended to.
///
/// Content handles ([`ParagraphId`], [`RunId`], [`TableId`]) are only
/// valid for the document that produced them. Passing a handle to a
/// different document returns an error or addresses unrelated content.
pub trait Document {
    /// Append an empty paragraph to the document body.
    fn add_paragraph(&mut self) -> ParagraphId;

    /// Set the alignment of an existing paragraph.
    fn set_alignment(&mut self, paragraph: ParagraphId, alignment: Alignment) -> Result<()>;

    /// Append an empty run to an existing paragraph.
    fn add_run(&mut self, paragraph: ParagraphId) -> Result<RunId>;

    /// Replace the text of an existing run.
    fn set_run_text(&mut self, run: RunId, text: &str) -> Result<()>;

    /// Append a table of `rows` by `cols` empty cells to the document body.
    ///
    /// Each cell starts out with a single empty paragraph. Fails with
    /// [`DocumentError::InvalidDimensions`](crate::DocumentError::InvalidDimensions)
    /// when either dimension is zero.
    fn add_table(&mut self, rows: usize, cols: usize) -> Result<TableId>;

    /// Set the height of one table row, in twips.
    fn set_row_height(&mut self, table: TableId, row: usize, height: u32) -> Result<()>;

    /// Set the width of one table cell, in twips.
    fn set_cell_width(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        width: u32,
    ) -> Result<()>;

    /// First paragraph of a table cell, for writing cell content.
    fn cell_paragraph(&mut self, table: TableId, row: usize, col: usize) -> Result<ParagraphId>;

    /// Set the interior padding of every cell of a table.
    fn set_cell_margins(&mut self, table: TableId, margins: CellMargins) -> Result<()>;

    /// Mutable access to the named style properties of a run.
    fn run_styles(&mut self, run: RunId) -> Result<&mut dyn RunStyles>;
}
