use std::collections::HashSet;

use serde::Serialize;

use crate::doc_id::DocumentId;

/// A successfully extracted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    id: DocumentId,
    name: String,
    content: String,
}

impl Document {
    /// Create a document with a freshly generated id.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId::fresh(),
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The resident, insertion-ordered collection of ingested documents.
///
/// No two documents share a `name`. The store only grows: [`merge`] is the
/// single way documents enter it.
///
/// [`merge`]: DocumentStore::merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    /// Append candidates whose names are new, in their given order.
    ///
    /// Names already in the store are skipped, and within `candidates` only
    /// the first occurrence of a name is kept. Returns how many documents
    /// were appended.
    pub fn merge(&mut self, candidates: Vec<Document>) -> usize {
        let mut seen: HashSet<String> =
            self.documents.iter().map(|d| d.name.clone()).collect();
        let before = self.documents.len();

        for candidate in candidates {
            if seen.insert(candidate.name.clone()) {
                self.documents.push(candidate);
            } else {
                tracing::debug!(
                    name = %candidate.name,
                    "skipping duplicate document name"
                );
            }
        }

        self.documents.len() - before
    }
}

impl<'a> IntoIterator for &'a DocumentStore {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
