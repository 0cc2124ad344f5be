//! Per-origin robots.txt cache
//!
//! Each origin's robots.txt is fetched at most once per crawl run, lazily,
//! on the first URL from that origin. Any failure along the way (network
//! error, non-200 status, unreadable body) caches the permissive marker so
//! robots.txt unavailability can never block a crawl.

use crate::robots::RobotsRules;
use crate::urls::origin;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Timeout for robots.txt requests, shorter than the page-fetch timeout
const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// Memoized allow/deny decisions per origin
///
/// Owned by one `Frontier` per crawl run; rules cached here are never
/// invalidated within a run.
pub struct RobotsCache {
    client: Client,
    user_agent: String,
    rules: HashMap<String, RobotsRules>,
}

impl RobotsCache {
    /// Creates an empty cache using the given client for robots.txt fetches
    ///
    /// The client is the same one used for page fetches, so robots.txt
    /// requests carry the same user agent and go through the same proxy.
    pub fn new(client: Client, user_agent: String) -> Self {
        Self {
            client,
            user_agent,
            rules: HashMap::new(),
        }
    }

    /// Checks whether the crawler may fetch `url`
    ///
    /// `file` URLs are always allowed. For network URLs the origin's rules
    /// are fetched on first use and consulted from the cache afterwards.
    pub async fn allowed(&mut self, url: &Url) -> bool {
        if url.scheme() == "file" {
            return true;
        }
        let key = origin(url);
        if !self.rules.contains_key(&key) {
            let rules = self.fetch_rules(&key).await;
            self.rules.insert(key.clone(), rules);
        }
        self.rules[&key].is_allowed(url.as_str(), &self.user_agent)
    }

    /// Returns the cached Crawl-delay for the URL's origin, if any
    ///
    /// Reads only what `allowed` already cached; never triggers a fetch.
    pub fn crawl_delay(&self, url: &Url) -> Option<f64> {
        if url.scheme() == "file" {
            return None;
        }
        self.rules
            .get(&origin(url))
            .and_then(|rules| rules.crawl_delay(&self.user_agent))
    }

    async fn fetch_rules(&self, origin: &str) -> RobotsRules {
        let robots_url = format!("{origin}/robots.txt");
        tracing::debug!("fetching {robots_url}");

        let response = match self
            .client
            .get(&robots_url)
            .timeout(ROBOTS_TIMEOUT)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("robots.txt unavailable for {origin}: {e}");
                return RobotsRules::permissive();
            }
        };

        if !response.status().is_success() {
            tracing::debug!("robots.txt for {origin} returned {}", response.status());
            return RobotsRules::permissive();
        }

        match response.text().await {
            Ok(body) => RobotsRules::from_content(&body),
            Err(e) => {
                tracing::warn!("failed to read robots.txt body for {origin}: {e}");
                RobotsRules::permissive()
            }
        }
    }

    /// Seeds the cache with pre-parsed rules, bypassing the network
    #[cfg(test)]
    pub(crate) fn insert_rules(&mut self, origin: &str, rules: RobotsRules) {
        self.rules.insert(origin.to_string(), rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> RobotsCache {
        RobotsCache::new(Client::new(), "seine/0.2".to_string())
    }

    #[tokio::test]
    async fn test_file_urls_always_allowed() {
        let mut cache = cache();
        let url = Url::parse("file:///tmp/page.html").unwrap();
        assert!(cache.allowed(&url).await);
    }

    #[tokio::test]
    async fn test_cached_rules_consulted_without_fetch() {
        let mut cache = cache();
        cache.insert_rules(
            "https://example.com",
            RobotsRules::from_content("User-agent: *\nDisallow: /private"),
        );

        let open = Url::parse("https://example.com/page").unwrap();
        let private = Url::parse("https://example.com/private/x").unwrap();
        assert!(cache.allowed(&open).await);
        assert!(!cache.allowed(&private).await);
    }

    #[test]
    fn test_crawl_delay_reads_cache_only() {
        let mut cache = cache();
        let url = Url::parse("https://example.com/page").unwrap();
        // Nothing cached yet: no delay, and no fetch attempted.
        assert_eq!(cache.crawl_delay(&url), None);

        cache.insert_rules(
            "https://example.com",
            RobotsRules::from_content("User-agent: *\nCrawl-delay: 3"),
        );
        assert_eq!(cache.crawl_delay(&url), Some(3.0));
    }

    #[test]
    fn test_crawl_delay_none_for_file_urls() {
        let cache = cache();
        let url = Url::parse("file:///tmp/page.html").unwrap();
        assert_eq!(cache.crawl_delay(&url), None);
    }
}
