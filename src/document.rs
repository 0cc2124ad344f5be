//! The document record produced by crawling and consumed by the indexer

use serde::{Deserialize, Serialize};

/// Maximum number of characters of extracted text kept per document
pub const MAX_TEXT_LEN: usize = 200_000;

/// A successfully fetched and extracted page
///
/// Documents are immutable once created and are identified everywhere else
/// by their position in the document collection (`doc_id`). The collection
/// order is discovery order and must not change between index build and
/// query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl Document {
    /// Creates a document, truncating the text to [`MAX_TEXT_LEN`] characters
    pub fn new(url: String, title: String, text: String) -> Self {
        Self {
            url,
            title,
            text: truncate_chars(text, MAX_TEXT_LEN),
        }
    }

    /// Returns the first `len` characters of the text
    pub fn snippet(&self, len: usize) -> &str {
        prefix_chars(&self.text, len)
    }
}

/// Truncates a string to at most `len` characters, on a char boundary
fn truncate_chars(mut s: String, len: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(len) {
        s.truncate(idx);
    }
    s
}

/// Returns the prefix of `s` holding at most `len` characters
fn prefix_chars(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
