//! Crawling: fetcher, extractor, and the frontier traversal engine

mod extractor;
mod fetcher;
mod frontier;

pub use extractor::{extract, ExtractedPage};
pub use fetcher::{build_http_client, fetch, FetchOutcome};
pub use frontier::{CrawlStats, Frontier};

use crate::config::{validate, CrawlConfig};
use crate::index::build_index;
use crate::storage;
use crate::SeineError;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// What one completed crawl run produced
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub stats: CrawlStats,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Runs a full crawl: traverse, persist documents, build and persist index
///
/// The index build always runs, even over an empty collection, so the
/// persisted index reflects exactly the document collection written by this
/// run.
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlSummary, SeineError> {
    validate(&config)?;

    let started_at = Utc::now();
    let start = Instant::now();
    let out_dir = config.out_dir.clone();

    let mut frontier = Frontier::new(config)?;
    let documents = frontier.run().await?;
    let stats = frontier.stats().clone();

    storage::save_documents(&out_dir, &documents)?;
    let index = build_index(&documents);
    storage::save_index(&out_dir, &index)?;

    tracing::info!(
        "crawl finished: {} documents, {} URLs discovered, index written to {}",
        stats.documents,
        stats.discovered,
        out_dir.display()
    );

    Ok(CrawlSummary {
        stats,
        started_at,
        elapsed: start.elapsed(),
    })
}
