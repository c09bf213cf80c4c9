use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{DocumentError, Result};
use crate::model::{Alignment, CellMargins, Document, ParagraphId, RunId, RunStyles, TableId};

/// One body-level entry, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Paragraph(ParagraphId),
    Table(TableId),
}

/// A paragraph holding zero or more runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    alignment: Alignment,
    runs: Vec<RunId>,
}

impl Paragraph {
    /// Get the paragraph alignment
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Get the runs of this paragraph, in order
    #[must_use]
    pub fn runs(&self) -> &[RunId] {
        &self.runs
    }
}

/// Character-level properties of a run.
///
/// Every field starts out unset, so a snapshot records exactly the
/// properties that were applied and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_through: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_caps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<i32>,
}

impl RunStyles for RunProperties {
    fn set_bold(&mut self, value: bool) {
        self.bold = Some(value);
    }

    fn set_italic(&mut self, value: bool) {
        self.italic = Some(value);
    }

    fn set_underline(&mut self, value: bool) {
        self.underline = Some(value);
    }

    fn set_strike_through(&mut self, value: bool) {
        self.strike_through = Some(value);
    }

    fn set_small_caps(&mut self, value: bool) {
        self.small_caps = Some(value);
    }

    fn set_font_size(&mut self, value: u32) {
        self.font_size = Some(value);
    }

    fn set_font_family(&mut self, value: &str) {
        self.font_family = Some(value.to_string());
    }

    fn set_color(&mut self, value: Color) {
        self.color = Some(value);
    }

    fn set_highlight(&mut self, value: Color) {
        self.highlight = Some(value);
    }

    fn set_character_spacing(&mut self, value: i32) {
        self.character_spacing = Some(value);
    }
}

/// A run of text sharing one set of character properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    text: String,
    properties: RunProperties,
}

impl Run {
    /// Get the run text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the run properties
    #[must_use]
    pub fn properties(&self) -> &RunProperties {
        &self.properties
    }
}

/// A table cell holding its own paragraphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    width: Option<u32>,
    paragraphs: Vec<ParagraphId>,
}

impl Cell {
    /// Get the cell width in twips, if one was set
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Get the paragraphs of this cell, in order
    #[must_use]
    pub fn paragraphs(&self) -> &[ParagraphId] {
        &self.paragraphs
    }
}

/// A table of cells in row-major order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    row_heights: Vec<Option<u32>>,
    cell_margins: Option<CellMargins>,
}

impl Table {
    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Get a cell by position
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let index = self.cell_index(row, col)?;
        Ok(&self.cells[index])
    }

    /// Get the height of a row in twips, if one was set
    #[must_use]
    pub fn row_height(&self, row: usize) -> Option<u32> {
        self.row_heights.get(row).copied().flatten()
    }

    /// Get the table-wide cell margins, if they were set
    #[must_use]
    pub fn cell_margins(&self) -> Option<CellMargins> {
        self.cell_margins
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(DocumentError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

/// An in-memory document (arena storage, body in insertion order)
///
/// Paragraphs, runs, and tables live in flat arenas and are addressed
/// through the handles the mutation methods return. The body records
/// only top-level blocks; paragraphs inside table cells are reachable
/// through their cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDocument {
    paragraphs: Vec<Paragraph>,
    runs: Vec<Run>,
    tables: Vec<Table>,
    body: Vec<Block>,
}

impl MemoryDocument {
    /// Create a new empty document
    #[must_use]
    pub fn new() -> Self {
        MemoryDocument::default()
    }

    /// Get the body blocks in document order
    #[must_use]
    pub fn body(&self) -> &[Block] {
        &self.body
    }

    /// Get a paragraph by handle
    pub fn paragraph(&self, id: ParagraphId) -> Result<&Paragraph> {
        self.paragraphs
            .get(id.0)
            .ok_or(DocumentError::UnknownParagraph { index: id.0 })
    }

    /// Get a run by handle
    pub fn run(&self, id: RunId) -> Result<&Run> {
        self.runs
            .get(id.0)
            .ok_or(DocumentError::UnknownRun { index: id.0 })
    }

    /// Get a table by handle
    pub fn table(&self, id: TableId) -> Result<&Table> {
        self.tables
            .get(id.0)
            .ok_or(DocumentError::UnknownTable { index: id.0 })
    }

    /// Number of body-level paragraphs (cell paragraphs not counted)
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.body
            .iter()
            .filter(|block| matches!(block, Block::Paragraph(_)))
            .count()
    }

    /// Total number of runs in the document
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Concatenated text of all runs of a paragraph
    pub fn paragraph_text(&self, id: ParagraphId) -> Result<String> {
        let paragraph = self.paragraph(id)?;
        let mut text = String::new();
        for run in &paragraph.runs {
            text.push_str(self.run(*run)?.text());
        }
        Ok(text)
    }

    /// Concatenated text of all paragraphs of a table cell
    pub fn cell_text(&self, table: TableId, row: usize, col: usize) -> Result<String> {
        let cell = self.table(table)?.cell(row, col)?;
        let mut text = String::new();
        for paragraph in &cell.paragraphs {
            text.push_str(&self.paragraph_text(*paragraph)?);
        }
        Ok(text)
    }

    /// Append a paragraph containing a single run of `text`.
    pub fn append_line(&mut self, text: &str) -> ParagraphId {
        let run = RunId(self.runs.len());
        self.runs.push(Run {
            text: text.to_string(),
            properties: RunProperties::default(),
        });
        let paragraph = ParagraphId(self.paragraphs.len());
        self.paragraphs.push(Paragraph {
            alignment: Alignment::default(),
            runs: vec![run],
        });
        self.body.push(Block::Paragraph(paragraph));
        paragraph
    }

    /// Append an aligned paragraph with one empty run and return the run.
    pub fn append_run(&mut self, alignment: Alignment) -> RunId {
        let run = RunId(self.runs.len());
        self.runs.push(Run::default());
        let paragraph = ParagraphId(self.paragraphs.len());
        self.paragraphs.push(Paragraph {
            alignment,
            runs: vec![run],
        });
        self.body.push(Block::Paragraph(paragraph));
        run
    }

    /// Allocate a paragraph in the arena without appending it to the body.
    fn alloc_paragraph(&mut self) -> ParagraphId {
        let id = ParagraphId(self.paragraphs.len());
        self.paragraphs.push(Paragraph::default());
        id
    }
}

impl Document for MemoryDocument {
    fn add_paragraph(&mut self) -> ParagraphId {
        let id = self.alloc_paragraph();
        self.body.push(Block::Paragraph(id));
        id
    }

    fn set_alignment(&mut self, paragraph: ParagraphId, alignment: Alignment) -> Result<()> {
        let target = self
            .paragraphs
            .get_mut(paragraph.0)
            .ok_or(DocumentError::UnknownParagraph { index: paragraph.0 })?;
        target.alignment = alignment;
        Ok(())
    }

    fn add_run(&mut self, paragraph: ParagraphId) -> Result<RunId> {
        if paragraph.0 >= self.paragraphs.len() {
            return Err(DocumentError::UnknownParagraph { index: paragraph.0 });
        }
        let run = RunId(self.runs.len());
        self.runs.push(Run::default());
        self.paragraphs[paragraph.0].runs.push(run);
        Ok(run)
    }

    fn set_run_text(&mut self, run: RunId, text: &str) -> Result<()> {
        let target = self
            .runs
            .get_mut(run.0)
            .ok_or(DocumentError::UnknownRun { index: run.0 })?;
        target.text = text.to_string();
        Ok(())
    }

    fn add_table(&mut self, rows: usize, cols: usize) -> Result<TableId> {
        if rows == 0 || cols == 0 {
            return Err(DocumentError::InvalidDimensions { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            let paragraph = self.alloc_paragraph();
            cells.push(Cell {
                width: None,
                paragraphs: vec![paragraph],
            });
        }
        let id = TableId(self.tables.len());
        self.tables.push(Table {
            rows,
            cols,
            cells,
            row_heights: vec![None; rows],
            cell_margins: None,
        });
        self.body.push(Block::Table(id));
        Ok(id)
    }

    fn set_row_height(&mut self, table: TableId, row: usize, height: u32) -> Result<()> {
        let target = self
            .tables
            .get_mut(table.0)
            .ok_or(DocumentError::UnknownTable { index: table.0 })?;
        if row >= target.rows {
            return Err(DocumentError::RowOutOfBounds {
                index: row,
                count: target.rows,
            });
        }
        target.row_heights[row] = Some(height);
        Ok(())
    }

    fn set_cell_width(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        width: u32,
    ) -> Result<()> {
        let target = self
            .tables
            .get_mut(table.0)
            .ok_or(DocumentError::UnknownTable { index: table.0 })?;
        let index = target.cell_index(row, col)?;
        target.cells[index].width = Some(width);
        Ok(())
    }

    fn cell_paragraph(&mut self, table: TableId, row: usize, col: usize) -> Result<ParagraphId> {
        let index = self
            .tables
            .get(table.0)
            .ok_or(DocumentError::UnknownTable { index: table.0 })?
            .cell_index(row, col)?;
        if let Some(first) = self.tables[table.0].cells[index].paragraphs.first() {
            return Ok(*first);
        }
        let paragraph = self.alloc_paragraph();
        self.tables[table.0].cells[index].paragraphs.push(paragraph);
        Ok(paragraph)
    }

    fn set_cell_margins(&mut self, table: TableId, margins: CellMargins) -> Result<()> {
        let target = self
            .tables
            .get_mut(table.0)
            .ok_or(DocumentError::UnknownTable { index: table.0 })?;
        target.cell_margins = Some(margins);
        Ok(())
    }

    fn run_styles(&mut self, run: RunId) -> Result<&mut dyn RunStyles> {
        let target = self
            .runs
            .get_mut(run.0)
            .ok_or(DocumentError::UnknownRun { index: run.0 })?;
        Ok(&mut target.properties)
    }
}
