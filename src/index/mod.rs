//! The inverted index: construction and cosine-similarity querying

mod builder;
mod search;
mod tokenize;

pub use builder::build_index;
pub use search::search;
pub use tokenize::tokenize;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Position of a document in the document collection
pub type DocId = u32;

/// Number of characters of document text returned with each hit
pub const SNIPPET_LEN: usize = 240;

/// One posting: `(doc_id, raw term count)`, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting(pub DocId, pub u32);

/// The inverted index built from one document collection
///
/// Built once, atomically, from the complete collection and read-only
/// afterwards. Postings store raw counts, not weights; each list is sorted
/// by ascending `doc_id`. `doc_norm` is indexed by `doc_id` and always has
/// exactly one entry per document in the collection.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Index {
    pub postings: HashMap<String, Vec<Posting>>,
    pub idf: HashMap<String, f64>,
    pub doc_norm: Vec<f64>,
}

/// Index-consistency errors
///
/// These indicate a programming or data error (an index queried against the
/// wrong document collection) and abort the query rather than producing
/// silently wrong rankings.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index covers {index_docs} documents but the collection has {collection_docs}")]
    DocCountMismatch {
        index_docs: usize,
        collection_docs: usize,
    },
}

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Cosine similarity, rounded to 4 decimals
    pub score: f64,
    pub url: String,
    pub title: String,
    /// First [`SNIPPET_LEN`] characters of the document text
    pub snippet: String,
}
