//! PDF text extraction backed by `lopdf`.

use lopdf::Document;
use tracing::debug;

use crate::extractor::{ExtractionError, TextExtractor, join_pages};

/// Extractor for PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(
        &self,
        bytes: Vec<u8>,
    ) -> Result<String, ExtractionError> {
        // Parsing is CPU-bound; keep it off the async worker threads.
        tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}

/// Extract the text of every page, in page order.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(ExtractionError::Encrypted);
    }

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ExtractionError::Empty);
    }
    debug!(pages = pages.len(), "extracting PDF text");

    let mut page_fragments = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let raw = doc
            .extract_text(&[*page_number])
            .map_err(|e| ExtractionError::Malformed(e.to_string()))?;
        page_fragments.push(page_to_fragments(&raw));
    }

    Ok(join_pages(page_fragments))
}

/// Split one page's raw text into its non-empty, trimmed fragments.
fn page_to_fragments(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
