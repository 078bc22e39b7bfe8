//! docsift - load a batch of PDF documents and rank them by keyword matches.
//!
//! Documents enter a [`DocumentStore`] through the intake pipeline
//! ([`ingestion::ingest`]), which extracts each file's text one at a time
//! and reports per-file failures without aborting the batch. The ranking
//! engine ([`search::rank`]) scores every document by how many distinct
//! comma-separated keywords it contains.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use docsift::{DocumentStore, PdfExtractor, ingestion, search};
//!
//! # async fn run() {
//! let files = ingestion::retain_pdfs(vec![
//!     ingestion::RawFile::from_path(Path::new("resumes/jane.pdf")),
//!     ingestion::RawFile::from_path(Path::new("resumes/john.pdf")),
//! ]);
//! let (store, errors) =
//!     ingestion::ingest(files, DocumentStore::new(), &PdfExtractor::new())
//!         .await;
//! if let Some(notice) = ingestion::notice(&errors) {
//!     eprintln!("{notice}");
//! }
//!
//! for scored in search::rank(&store, "rust, python") {
//!     println!("{} ({} matches)", scored.document.name(), scored.score);
//! }
//! # }
//! ```

pub mod cli;
pub mod doc_id;
pub mod error;
pub mod extractor;
pub mod ingestion;
pub mod output;
pub mod pdf;
pub mod search;
pub mod store;
pub mod text_util;
pub mod walker;

pub use doc_id::DocumentId;
pub use error::{Error, Result};
pub use extractor::{ExtractionError, TextExtractor};
pub use ingestion::{IntakeError, RawFile};
pub use pdf::PdfExtractor;
pub use search::{Listing, ScoredDocument};
pub use store::{Document, DocumentStore};
