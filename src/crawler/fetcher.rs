//! Page fetching
//!
//! One shared HTTP client carries the user agent, timeout, and optional
//! upstream proxy for every request in a crawl run, robots.txt included.
//! `file` URLs are read from disk with lossy decoding so an invalid byte
//! sequence can never abort a crawl.

use crate::config::CrawlConfig;
use reqwest::{Client, Proxy};
use std::time::Duration;
use url::Url;

/// Outcome of fetching one URL
///
/// Only `Html` yields a document. The other variants are per-URL skips the
/// frontier recovers from; none of them is fatal to the run.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Body retrieved and advertised as HTML
    Html(String),

    /// Response carried a non-HTML content type; the URL is skipped
    NotHtml { content_type: String },

    /// Connection error, timeout, body-read error, or file-read error
    Failed { error: String },
}

/// Builds the HTTP client shared by page and robots.txt fetches
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(config.timeout.min(10)))
        .gzip(true)
        .brotli(true);

    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(Proxy::all(proxy.as_str())?);
    }

    builder.build()
}

/// Fetches the raw content of a URL
///
/// Network URLs are fetched with a GET, following redirects, and accepted
/// whenever the `Content-Type` advertises HTML; the status code is not
/// otherwise inspected. `file` URLs are read from the local filesystem.
pub async fn fetch(client: &Client, url: &Url) -> FetchOutcome {
    if url.scheme() == "file" {
        return fetch_file(url);
    }

    let response = match client.get(url.as_str()).send().await {
        Ok(r) => r,
        Err(e) => {
            let error = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                format!("connection failed: {e}")
            } else {
                e.to_string()
            };
            return FetchOutcome::Failed { error };
        }
    };

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchOutcome::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Html(body),
        Err(e) => FetchOutcome::Failed {
            error: format!("failed to read body: {e}"),
        },
    }
}

fn fetch_file(url: &Url) -> FetchOutcome {
    let path = match url.to_file_path() {
        Ok(p) => p,
        Err(()) => {
            return FetchOutcome::Failed {
                error: format!("not a local file path: {url}"),
            }
        }
    };
    match std::fs::read(&path) {
        Ok(bytes) => FetchOutcome::Html(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => FetchOutcome::Failed {
            error: format!("failed to read {}: {e}", path.display()),
        },
    }
}
