//! Report Rendering Examples
//!
//! Builds a small status report in an in-memory document: headings,
//! broadcast-configured tables, and dynamically dispatched styles.

use paperkit_document::{Alignment, CellMargins, MemoryDocument};
use paperkit_render::{write_line, StyleRegistry, TableRenderer, TableSpec};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut doc = MemoryDocument::new();
    let renderer = TableRenderer::new();

    write_line(&mut doc, "Weekly Production Report")?;

    // A fully configured table: one alignment and one row height
    // broadcast over the whole grid.
    let summary = TableSpec::new(3, 3)
        .with_values(vec![
            vec!["Line", "Output", "Defects"],
            vec!["A", "1204", "3"],
            vec!["B", "987", "11"],
        ])
        .with_alignment(Alignment::Center)
        .with_row_height(300)
        .with_col_widths(vec![1600, 1200, 1200])
        .with_margins(CellMargins::uniform(80))
        .with_style("font_family", "Calibri")
        .with_style("font_size", 22_i64);

    let report = renderer.render(&mut doc, &summary)?;
    println!(
        "Summary table: {} rows filled, clean = {}",
        report.rows_filled,
        report.is_clean()
    );

    // A ragged grid plus an unregistered property: rendering still
    // completes and the failures are reported.
    let notes = TableSpec::new(2, 2)
        .with_values(vec![vec!["note", "owner"], vec!["restock"]])
        .with_style("bold", true)
        .with_style("blink", true);

    let report = renderer.render(&mut doc, &notes)?;
    for failure in &report.style_failures {
        println!(
            "Could not style cell ({}, {}): {}",
            failure.row, failure.col, failure.error
        );
    }

    // Extending the dispatch surface with a composite property.
    let mut registry = StyleRegistry::default();
    registry.register("emphasis", |run, _value| {
        run.set_bold(true);
        run.set_italic(true);
        Ok(())
    });
    let custom = TableRenderer::with_registry(registry);

    let alert = TableSpec::new(1, 1)
        .with_values(vec![vec!["Line B defect rate above threshold"]])
        .with_style("emphasis", true);
    let report = custom.render(&mut doc, &alert)?;
    println!("Alert table clean = {}", report.is_clean());

    println!("\nDocument snapshot:\n{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
