use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    extractor::{ExtractionError, TextExtractor},
    store::{Document, DocumentStore},
};

/// Media type accepted by the intake pipeline.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Where a raw file's bytes come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Read from disk when the file's turn comes.
    Path(PathBuf),
    /// Already in memory.
    Bytes(Vec<u8>),
}

/// A file handed to the intake pipeline, before extraction.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub media_type: String,
    pub source: FileSource,
}

impl RawFile {
    /// A file on disk; the media type is guessed from its extension.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let media_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            name,
            media_type,
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

/// Drop every file whose declared media type is not PDF.
///
/// Dropped files are not errors; they never reach [`ingest`].
pub fn retain_pdfs(files: Vec<RawFile>) -> Vec<RawFile> {
    files
        .into_iter()
        .filter(|file| {
            let keep = file.is_pdf();
            if !keep {
                debug!(
                    name = %file.name,
                    media_type = %file.media_type,
                    "ignoring non-PDF file"
                );
            }
            keep
        })
        .collect()
}

/// Why a single file failed intake.
#[derive(Debug, thiserror::Error)]
pub enum IntakeFailure {
    #[error("error reading file: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// A per-file intake failure, reported after the batch settles.
#[derive(Debug, thiserror::Error)]
#[error("failed to process {name}: {reason}")]
pub struct IntakeError {
    pub name: String,
    #[source]
    pub reason: IntakeFailure,
}

/// Build one notice covering every failure in a batch.
///
/// Returns `None` when the batch had no failures.
pub fn notice(errors: &[IntakeError]) -> Option<String> {
    match errors {
        [] => None,
        [only] => Some(format!(
            "Failed to process {}. It might be corrupted or protected.",
            only.name
        )),
        many => {
            let names: Vec<&str> =
                many.iter().map(|e| e.name.as_str()).collect();
            Some(format!(
                "Failed to process {} files ({}). They might be corrupted \
                 or protected.",
                many.len(),
                names.join(", ")
            ))
        }
    }
}

async fn read_bytes(source: FileSource) -> std::io::Result<Vec<u8>> {
    match source {
        FileSource::Path(path) => tokio::fs::read(path).await,
        FileSource::Bytes(bytes) => Ok(bytes),
    }
}

async fn extract_one<E: TextExtractor>(
    source: FileSource,
    extractor: &E,
) -> Result<String, IntakeFailure> {
    let bytes = read_bytes(source).await?;
    Ok(extractor.extract(bytes).await?)
}

/// Ingest one batch of files into `store`.
///
/// Files are processed one at a time in input order; a file's read and
/// extraction complete before the next file is touched. A failing file is
/// recorded and skipped. Once every file has settled, the new documents are
/// merged into the store (see [`DocumentStore::merge`]).
///
/// Never fails as a whole: the updated store is always returned alongside
/// the per-file errors.
pub async fn ingest<E: TextExtractor>(
    files: Vec<RawFile>,
    mut store: DocumentStore,
    extractor: &E,
) -> (DocumentStore, Vec<IntakeError>) {
    let total = files.len();
    let mut staged = Vec::with_capacity(total);
    let mut errors = Vec::new();

    for RawFile { name, source, .. } in files {
        match extract_one(source, extractor).await {
            Ok(text) => {
                debug!(%name, chars = text.len(), "extracted document");
                staged.push(Document::new(name, text));
            }
            Err(reason) => {
                warn!(%name, error = %reason, "failed to process file");
                errors.push(IntakeError { name, reason });
            }
        }
    }

    let added = store.merge(staged);
    info!(
        files = total,
        added,
        failed = errors.len(),
        documents = store.len(),
        "intake batch complete"
    );

    (store, errors)
}
