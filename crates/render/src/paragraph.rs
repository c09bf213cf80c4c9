use paperkit_document::{Alignment, Document, ParagraphId, RunId};

use crate::error::Result;

/// Append a paragraph containing a single run of `text`.
pub fn write_line<D: Document>(document: &mut D, text: &str) -> Result<ParagraphId> {
    let paragraph = document.add_paragraph();
    let run = document.add_run(paragraph)?;
    document.set_run_text(run, text)?;
    Ok(paragraph)
}

/// Append an aligned paragraph with one empty run, for callers that
/// want to style the run before setting its text.
pub fn aligned_run<D: Document>(document: &mut D, alignment: Alignment) -> Result<RunId> {
    let paragraph = document.add_paragraph();
    document.set_alignment(paragraph, alignment)?;
    let run = document.add_run(paragraph)?;
    Ok(run)
}
