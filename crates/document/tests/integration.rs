use paperkit_document::{
    Alignment, Block, CellMargins, Color, Document, DocumentError, MemoryDocument,
};

// ===== Paragraph Tests =====

#[test]
fn test_paragraph_lifecycle() {
    let mut doc = MemoryDocument::new();

    let paragraph = doc.add_paragraph();
    doc.set_alignment(paragraph, Alignment::Both).unwrap();
    let first = doc.add_run(paragraph).unwrap();
    let second = doc.add_run(paragraph).unwrap();
    doc.set_run_text(first, "Hello, ").unwrap();
    doc.set_run_text(second, "world").unwrap();

    assert_eq!(doc.paragraph(paragraph).unwrap().alignment(), Alignment::Both);
    assert_eq!(doc.paragraph(paragraph).unwrap().runs().len(), 2);
    assert_eq!(doc.paragraph_text(paragraph).unwrap(), "Hello, world");
}

#[test]
fn test_run_text_can_be_replaced() {
    let mut doc = MemoryDocument::new();
    let paragraph = doc.add_paragraph();
    let run = doc.add_run(paragraph).unwrap();

    doc.set_run_text(run, "draft").unwrap();
    doc.set_run_text(run, "final").unwrap();

    assert_eq!(doc.run(run).unwrap().text(), "final");
}

// ===== Table Tests =====

#[test]
fn test_table_layout_properties() {
    let mut doc = MemoryDocument::new();
    let table = doc.add_table(3, 2).unwrap();

    doc.set_row_height(table, 0, 600).unwrap();
    doc.set_cell_width(table, 1, 1, 2880).unwrap();
    doc.set_cell_margins(table, CellMargins::new(100, 80, 100, 80))
        .unwrap();

    let stored = doc.table(table).unwrap();
    assert_eq!(stored.row_height(0), Some(600));
    assert_eq!(stored.row_height(1), None);
    assert_eq!(stored.cell(1, 1).unwrap().width(), Some(2880));
    assert_eq!(stored.cell(0, 0).unwrap().width(), None);
    assert_eq!(
        stored.cell_margins(),
        Some(CellMargins::new(100, 80, 100, 80))
    );
}

#[test]
fn test_cell_paragraph_is_stable() {
    let mut doc = MemoryDocument::new();
    let table = doc.add_table(2, 2).unwrap();

    let first = doc.cell_paragraph(table, 1, 0).unwrap();
    let second = doc.cell_paragraph(table, 1, 0).unwrap();
    assert_eq!(first, second);

    let other = doc.cell_paragraph(table, 0, 1).unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_table_errors() {
    let mut doc = MemoryDocument::new();
    let table = doc.add_table(2, 2).unwrap();

    assert!(matches!(
        doc.set_cell_width(table, 0, 2, 1440),
        Err(DocumentError::CellOutOfBounds { col: 2, .. })
    ));
    assert!(matches!(
        doc.add_table(0, 0),
        Err(DocumentError::InvalidDimensions { .. })
    ));
}

// ===== Mixed Body Tests =====

#[test]
fn test_body_interleaves_paragraphs_and_tables() {
    let mut doc = MemoryDocument::new();

    doc.append_line("heading");
    let table = doc.add_table(1, 1).unwrap();
    doc.append_line("footer");

    let kinds: Vec<bool> = doc
        .body()
        .iter()
        .map(|block| matches!(block, Block::Table(_)))
        .collect();
    assert_eq!(kinds, vec![false, true, false]);
    assert_eq!(doc.table(table).unwrap().row_count(), 1);
}

// ===== Style Tests =====

#[test]
fn test_styles_accumulate_on_a_run() {
    let mut doc = MemoryDocument::new();
    let run = doc.append_run(Alignment::Center);
    doc.set_run_text(run, "styled").unwrap();

    {
        let styles = doc.run_styles(run).unwrap();
        styles.set_bold(true);
        styles.set_font_family("Georgia");
        styles.set_font_size(24);
        styles.set_color(Color::new(0x33, 0x66, 0x99));
        styles.set_character_spacing(-10);
    }

    let properties = doc.run(run).unwrap().properties();
    assert_eq!(properties.bold, Some(true));
    assert_eq!(properties.font_family.as_deref(), Some("Georgia"));
    assert_eq!(properties.font_size, Some(24));
    assert_eq!(properties.color, Some(Color::new(0x33, 0x66, 0x99)));
    assert_eq!(properties.character_spacing, Some(-10));
    assert_eq!(properties.underline, None);
}

// ===== Serialization Tests =====

#[test]
fn test_document_round_trips_through_json() {
    let mut doc = MemoryDocument::new();
    doc.append_line("before");
    let table = doc.add_table(2, 2).unwrap();
    let paragraph = doc.cell_paragraph(table, 0, 0).unwrap();
    let run = doc.add_run(paragraph).unwrap();
    doc.set_run_text(run, "cell").unwrap();
    doc.set_row_height(table, 1, 360).unwrap();

    let json = serde_json::to_string_pretty(&doc).unwrap();
    let restored: MemoryDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.body().len(), doc.body().len());
    assert_eq!(restored.cell_text(table, 0, 0).unwrap(), "cell");
    assert_eq!(restored.table(table).unwrap().row_height(1), Some(360));
}
