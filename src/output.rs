//! Output formatters for the `docsift` binary.
//!
//! - **Human**: headed list of document cards with match badges
//! - **JSON**: structured listing for scripting
//! - **Files**: document names only, one per line

use std::io::{self, Write};

use serde::Serialize;

use crate::{
    doc_id::DocumentId,
    error::Result,
    search::{Listing, search_terms},
    store::{Document, DocumentStore},
    text_util,
};

/// Knobs shared by every listing format.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Show at most this many documents.
    pub count: Option<usize>,
    /// Characters in each document preview.
    pub preview_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            count: None,
            preview_chars: text_util::DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Flatten a listing into `(document, score)` rows, honoring `count`.
fn rows<'a>(
    listing: &Listing<'a>,
    count: Option<usize>,
) -> Vec<(&'a Document, usize)> {
    let all: Vec<(&'a Document, usize)> = match listing {
        Listing::All(documents) => {
            let documents: &'a [Document] = *documents;
            documents.iter().map(|d| (d, 0)).collect()
        }
        Listing::Matching(scored) => {
            scored.iter().map(|s| (s.document, s.score)).collect()
        }
    };
    let limit = count.unwrap_or(all.len());
    all.into_iter().take(limit).collect()
}

/// Preview text on a single line.
fn one_line_preview(content: &str, max_chars: usize) -> String {
    text_util::preview(content, max_chars)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the listing for terminal reading.
pub fn write_human<W: Write>(
    out: &mut W,
    store: &DocumentStore,
    listing: &Listing<'_>,
    query: &str,
    options: RenderOptions,
) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "Your document list is empty")?;
        writeln!(out, "Add some PDF files to get started!")?;
        return Ok(());
    }

    match listing {
        Listing::All(_) => {
            writeln!(out, "All Uploaded Documents ({})", listing.len())?
        }
        Listing::Matching(_) => {
            writeln!(out, "Matching Documents ({})", listing.len())?
        }
    }
    writeln!(out)?;

    let terms = search_terms(query);
    for (i, (document, score)) in
        rows(listing, options.count).into_iter().enumerate()
    {
        write!(out, "{:>3}. {} {}", i + 1, document.name(), document.id())?;
        if let Some(label) = text_util::match_label(score) {
            write!(out, " [{label}]")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "     {}",
            one_line_preview(document.content(), options.preview_chars)
        )?;
        if let Some((snippet, line)) =
            text_util::extract_snippet(document.content(), &terms)
        {
            for (offset, text) in snippet.lines().enumerate() {
                writeln!(out, "     {:>4}: {text}", line + offset)?;
            }
        }
    }

    if matches!(listing, Listing::Matching(_)) && listing.is_empty() {
        writeln!(out, "No documents found matching your keywords.")?;
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonListing<'a> {
    query: &'a str,
    view: &'static str,
    total: usize,
    results: Vec<JsonRow<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    rank: usize,
    id: DocumentId,
    name: &'a str,
    score: usize,
    preview: String,
}

/// Write the listing as a single JSON object.
pub fn write_json<W: Write>(
    out: &mut W,
    listing: &Listing<'_>,
    query: &str,
    options: RenderOptions,
) -> Result<()> {
    let view = match listing {
        Listing::All(_) => "all",
        Listing::Matching(_) => "matching",
    };
    let results = rows(listing, options.count)
        .into_iter()
        .enumerate()
        .map(|(i, (document, score))| JsonRow {
            rank: i + 1,
            id: document.id(),
            name: document.name(),
            score,
            preview: text_util::preview(
                document.content(),
                options.preview_chars,
            ),
        })
        .collect();

    serde_json::to_writer(
        &mut *out,
        &JsonListing {
            query,
            view,
            total: listing.len(),
            results,
        },
    )?;
    writeln!(out)?;
    Ok(())
}

/// Write only document names, one per line.
pub fn write_files<W: Write>(
    out: &mut W,
    listing: &Listing<'_>,
    options: RenderOptions,
) -> io::Result<()> {
    for (document, _) in rows(listing, options.count) {
        writeln!(out, "{}", document.name())?;
    }
    Ok(())
}
