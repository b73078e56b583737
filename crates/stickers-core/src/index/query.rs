//! Keyword and query normalization.

/// Normalize a keyword for indexing or lookup: trim surrounding whitespace
/// and lower-case.
///
/// An all-whitespace keyword normalizes to the empty string, which is still a
/// valid key.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Split a query into normalized words.
///
/// Returns an empty list for an absent, empty or whitespace-only query, which
/// callers treat as "list everything".
pub fn query_words(query: Option<&str>) -> Vec<String> {
    query
        .map(|q| q.split_whitespace().map(normalize_keyword).collect())
        .unwrap_or_default()
}
