//! URL handling for seine
//!
//! This module provides URL normalization plus the host and origin helpers
//! used for per-host accounting, same-site restriction, and the politeness
//! cache.

mod normalize;

pub use normalize::normalize_url;

use url::Url;

/// Returns the `host[:port]` key identifying a URL's site
///
/// The port appears only when it is explicit and non-default, so
/// `http://127.0.0.1:8080/` and `http://127.0.0.1:9090/` count as distinct
/// hosts. URLs without a host (notably `file` URLs) map to the empty string.
pub fn host(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(h), Some(p)) => format!("{h}:{p}"),
        (Some(h), None) => h.to_string(),
        (None, _) => String::new(),
    }
}

/// Returns the `scheme://host[:port]` origin used as the politeness-cache key
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns true iff the URL's host equals the host of any seed
pub fn same_site(url: &Url, seeds: &[Url]) -> bool {
    let h = host(url);
    seeds.iter().any(|seed| host(seed) == h)
}
