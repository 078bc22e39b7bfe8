/// Default number of characters shown in a document preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 150;

/// Number of lines in a snippet around a keyword hit.
pub const DEFAULT_SNIPPET_LINES: usize = 3;

/// Maximum number of characters in a snippet before truncation.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 400;

/// Cut `text` to at most `max_chars` characters, on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

/// The leading `max_chars` characters of a document, followed by `...`.
pub fn preview(content: &str, max_chars: usize) -> String {
    let (head, _) = truncate_chars(content, max_chars);
    format!("{head}...")
}

/// Badge text for a document's score, e.g. "1 Match" or "3 Matches".
///
/// Returns `None` for a score of zero.
pub fn match_label(score: usize) -> Option<String> {
    match score {
        0 => None,
        1 => Some("1 Match".to_string()),
        n => Some(format!("{n} Matches")),
    }
}

/// Extract a snippet around the first line containing any of `terms`.
///
/// `terms` must be lower-cased. Returns `(snippet_text, start_line_number)`
/// with a 1-indexed line number, or `None` if no line matches.
pub fn extract_snippet(
    text: &str,
    terms: &[String],
) -> Option<(String, usize)> {
    let lines: Vec<&str> = text.lines().collect();

    let idx = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        terms.iter().any(|term| lower.contains(term.as_str()))
    })?;

    let start = idx.saturating_sub(DEFAULT_SNIPPET_LINES / 2);
    let end = (start + DEFAULT_SNIPPET_LINES).min(lines.len());

    let joined = lines[start..end].join("\n");
    let (head, truncated) = truncate_chars(&joined, DEFAULT_SNIPPET_MAX_CHARS);
    let mut snippet = head.to_string();
    if truncated {
        snippet.push_str("...");
    }

    Some((snippet, start + 1))
}
