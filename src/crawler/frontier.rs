//! The crawl frontier: traversal engine and politeness enforcement
//!
//! Breadth-first traversal over a FIFO queue of normalized URLs, bounded by
//! the document limit and per-host quotas. All per-URL failures are
//! recovered here; a single bad page never aborts a run.

use crate::config::CrawlConfig;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{build_http_client, fetch, FetchOutcome};
use crate::document::Document;
use crate::robots::RobotsCache;
use crate::urls::{host, normalize_url, same_site};
use crate::SeineError;
use reqwest::Client;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Counters describing one crawl run
#[derive(Debug, Default, Clone)]
pub struct CrawlStats {
    /// Documents collected
    pub documents: usize,
    /// Distinct URLs ever enqueued (visited or pending)
    pub discovered: usize,
    /// URLs dropped by the same-site restriction
    pub skipped_offsite: usize,
    /// URLs disallowed by robots.txt
    pub skipped_robots: usize,
    /// URLs dropped because their host reached `max_per_host`
    pub skipped_host_cap: usize,
    /// URLs whose response was not HTML
    pub skipped_not_html: usize,
    /// URLs whose fetch failed outright
    pub failed_fetches: usize,
    /// Pages fetched fine but holding no indexable text
    pub skipped_empty: usize,
}

/// The traversal engine for one crawl run
///
/// Owns the queue, the seen-set, the per-host counters, and the robots
/// cache; all of it is constructed fresh per run and dropped afterwards, so
/// repeated crawls in one process never share state.
pub struct Frontier {
    config: CrawlConfig,
    client: Client,
    robots: RobotsCache,
    seed_urls: Vec<Url>,
    queue: VecDeque<Url>,
    seen: HashSet<String>,
    per_host: HashMap<String, u32>,
    stats: CrawlStats,
}

impl Frontier {
    /// Creates a frontier seeded with the configured URLs
    ///
    /// Seeds that fail normalization are dropped with a warning, matching
    /// how discovered links are treated. Duplicate seeds collapse into one
    /// queue entry.
    pub fn new(config: CrawlConfig) -> Result<Self, SeineError> {
        let client = build_http_client(&config)?;
        let robots = RobotsCache::new(client.clone(), config.user_agent.clone());

        let mut frontier = Self {
            config,
            client,
            robots,
            seed_urls: Vec::new(),
            queue: VecDeque::new(),
            seen: HashSet::new(),
            per_host: HashMap::new(),
            stats: CrawlStats::default(),
        };

        for raw in frontier.config.seeds.clone() {
            match normalize_url(&raw) {
                Ok(url) => {
                    frontier.seed_urls.push(url.clone());
                    frontier.enqueue(url);
                }
                Err(e) => tracing::warn!("dropping seed '{raw}': {e}"),
            }
        }

        Ok(frontier)
    }

    /// Runs the crawl to completion and returns the document collection
    ///
    /// The loop dequeues one URL at a time and applies, in order: the
    /// same-site restriction, robots.txt, the per-host quota, the fetch,
    /// and text extraction. Every stage can discard the URL and move on; a
    /// URL discarded once is never retried within the run. The loop ends
    /// when the queue empties or `limit` documents are collected.
    pub async fn run(&mut self) -> Result<Vec<Document>, SeineError> {
        let mut documents = Vec::new();

        while documents.len() < self.config.limit {
            let Some(url) = self.queue.pop_front() else {
                break;
            };

            if self.config.restrict_to_seeds && !same_site(&url, &self.seed_urls) {
                self.stats.skipped_offsite += 1;
                tracing::debug!("off-site, skipping {url}");
                continue;
            }

            if !self.robots.allowed(&url).await {
                self.stats.skipped_robots += 1;
                tracing::debug!("disallowed by robots.txt: {url}");
                continue;
            }

            let url_host = host(&url);
            if self.config.max_per_host > 0
                && self.per_host.get(&url_host).copied().unwrap_or(0) >= self.config.max_per_host
            {
                self.stats.skipped_host_cap += 1;
                tracing::debug!("host quota reached for {url_host}, skipping {url}");
                continue;
            }

            let body = match fetch(&self.client, &url).await {
                FetchOutcome::Html(body) => body,
                FetchOutcome::NotHtml { content_type } => {
                    self.stats.skipped_not_html += 1;
                    tracing::debug!("not HTML ({content_type}): {url}");
                    continue;
                }
                FetchOutcome::Failed { error } => {
                    self.stats.failed_fetches += 1;
                    tracing::debug!("fetch failed for {url}: {error}");
                    continue;
                }
            };

            let page = extract(&body, &url);
            if page.text.is_empty() {
                self.stats.skipped_empty += 1;
                tracing::debug!("no indexable text: {url}");
                continue;
            }

            tracing::info!("collected {url} ({} documents)", documents.len() + 1);
            documents.push(Document::new(url.to_string(), page.title, page.text));
            *self.per_host.entry(url_host).or_insert(0) += 1;

            for link in page.links {
                self.enqueue(link);
            }

            self.pause(&url).await;
        }

        self.stats.documents = documents.len();
        self.stats.discovered = self.seen.len();
        Ok(documents)
    }

    /// Returns the counters accumulated so far
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    /// Queues a URL unless it was ever enqueued before
    ///
    /// The seen-set holds every URL ever queued, visited or not, so each
    /// distinct normalized URL enters the queue at most once per run.
    fn enqueue(&mut self, url: Url) -> bool {
        if self.seen.insert(url.to_string()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Politeness pause after a collected page
    ///
    /// Sleeps for the configured delay, or the origin's robots.txt
    /// Crawl-delay when that is larger.
    async fn pause(&self, url: &Url) {
        let delay = self
            .robots
            .crawl_delay(url)
            .map_or(self.config.delay, |d| d.max(self.config.delay));
        if delay > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }
    }
}
