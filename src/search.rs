use std::collections::HashSet;

use serde::Serialize;

use crate::store::{Document, DocumentStore};

/// A document paired with the number of distinct query terms it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredDocument<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub score: usize,
}

/// Normalize a raw comma-delimited query into distinct search terms.
///
/// Lower-cases, splits on `,`, trims each piece and drops empty ones.
/// Terms keep the order of their first occurrence.
pub fn search_terms(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut seen = HashSet::new();
    lowered
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(*term))
        .map(str::to_string)
        .collect()
}

/// Count how many of `terms` occur in `content`, case-insensitively.
///
/// `terms` must already be lower-cased and distinct.
fn score(content: &str, terms: &[String]) -> usize {
    let content = content.to_lowercase();
    terms
        .iter()
        .filter(|term| content.contains(term.as_str()))
        .count()
}

/// Rank the store against a keyword query.
///
/// With no search terms every document is returned in store order with a
/// score of zero. Otherwise documents matching no term are dropped and the
/// rest are ordered by score, highest first, keeping store order among
/// equal scores.
pub fn rank<'a>(
    store: &'a DocumentStore,
    query: &str,
) -> Vec<ScoredDocument<'a>> {
    let terms = search_terms(query);

    if terms.is_empty() {
        return store
            .iter()
            .map(|document| ScoredDocument { document, score: 0 })
            .collect();
    }

    let mut scored: Vec<ScoredDocument<'a>> = store
        .iter()
        .map(|document| ScoredDocument {
            document,
            score: score(document.content(), &terms),
        })
        .filter(|s| s.score > 0)
        .collect();

    // `sort_by` is stable, so ties stay in insertion order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// What the caller should display for a raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The raw query is empty: show the whole store, unscored.
    All(&'a [Document]),
    /// The raw query is non-empty: show the ranked view, which may be empty.
    Matching(Vec<ScoredDocument<'a>>),
}

impl Listing<'_> {
    pub fn len(&self) -> usize {
        match self {
            Listing::All(documents) => documents.len(),
            Listing::Matching(scored) => scored.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decide between the unfiltered store and the ranked view.
///
/// Only a literally empty query shows everything. A query such as `",,"`
/// has no terms, so its ranked view is every document with score zero, but
/// it is still presented as a matching view.
pub fn listing<'a>(
    store: &'a DocumentStore,
    raw_query: &str,
) -> Listing<'a> {
    if raw_query.is_empty() {
        Listing::All(store.documents())
    } else {
        Listing::Matching(rank(store, raw_query))
    }
}
