//! Persistence of the document collection and the index
//!
//! A crawl writes two JSON files into its output directory: `docs.json`,
//! the ordered document collection, and `index.json`, the inverted index.
//! Document order is load-bearing — `doc_id` is positional — so both files
//! are plain arrays/maps with no reordering on either side.

use crate::document::Document;
use crate::index::Index;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the persisted document collection
pub const DOCS_FILE: &str = "docs.json";

/// File name of the persisted index
pub const INDEX_FILE: &str = "index.json";

/// Storage errors
///
/// Unlike per-URL crawl failures, these are structural: an output that
/// cannot be written or read aborts the operation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the document collection to `dir/docs.json`, creating `dir`
pub fn save_documents(dir: &Path, documents: &[Document]) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    let bytes = serde_json::to_vec(documents)?;
    fs::write(dir.join(DOCS_FILE), bytes)?;
    Ok(())
}

/// Loads the document collection from `dir/docs.json`
pub fn load_documents(dir: &Path) -> Result<Vec<Document>, StorageError> {
    let bytes = fs::read(dir.join(DOCS_FILE))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes the index to `dir/index.json`, creating `dir`
pub fn save_index(dir: &Path, index: &Index) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    let bytes = serde_json::to_vec(index)?;
    fs::write(dir.join(INDEX_FILE), bytes)?;
    Ok(())
}

/// Loads the index from `dir/index.json`
pub fn load_index(dir: &Path) -> Result<Index, StorageError> {
    let bytes = fs::read(dir.join(INDEX_FILE))?;
    Ok(serde_json::from_slice(&bytes)?)
}
