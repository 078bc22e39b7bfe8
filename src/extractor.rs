use std::future::Future;

/// Reasons a [`TextExtractor`] can reject a document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("document is encrypted")]
    Encrypted,

    #[error("document has no pages")]
    Empty,

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// Turns raw document bytes into plain text.
///
/// Implementations may suspend while extracting. The intake pipeline awaits
/// each call to completion before starting the next file.
pub trait TextExtractor {
    fn extract(
        &self,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, ExtractionError>> + Send;
}

/// Join per-page text fragments into a document body.
///
/// Fragments within a page are separated by a single space and every page
/// is terminated by a newline.
pub fn join_pages<P, F>(pages: P) -> String
where
    P: IntoIterator<Item = F>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let mut first = true;
        for fragment in page {
            if !first {
                text.push(' ');
            }
            text.push_str(fragment.as_ref());
            first = false;
        }
        text.push('\n');
    }
    text
}
