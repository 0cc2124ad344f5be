//! Seine: a bounded web crawler with a TF-IDF search index
//!
//! This crate crawls a bounded set of pages reachable from seed URLs while
//! respecting robots.txt and per-host limits, builds an inverted index with
//! TF-IDF weights over the collected documents, and answers ranked keyword
//! queries by cosine similarity.

pub mod config;
pub mod crawler;
pub mod document;
pub mod index;
pub mod robots;
pub mod storage;
pub mod urls;

use thiserror::Error;

/// Main error type for seine operations
///
/// Per-URL crawl failures never surface here: the frontier recovers them
/// locally and moves on. Only structural failures (bad configuration,
/// unwritable output, a corrupt or mismatched index) abort an operation.
#[derive(Debug, Error)]
pub enum SeineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("index error: {0}")]
    Index(#[from] index::IndexError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
///
/// These mark a discovered link as unusable. Callers drop the link and
/// continue; a `UrlError` is never fatal to a crawl.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("failed to parse URL: {0}")]
    Parse(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for seine operations
pub type Result<T> = std::result::Result<T, SeineError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{run_crawl, CrawlSummary};
pub use document::Document;
pub use index::{build_index, search, Index, SearchHit};
pub use urls::normalize_url;
