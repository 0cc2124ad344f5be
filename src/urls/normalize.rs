use crate::UrlError;
use url::Url;

/// Schemes the crawler knows how to fetch
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "file"];

/// Normalizes a URL into the canonical form used for deduplication
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject any scheme other than `http`, `https`, or `file`
/// 3. Strip the fragment
///
/// Nothing else is rewritten: two URLs differing only by fragment compare
/// equal after normalization, and normalizing an already-normalized URL
/// returns it unchanged. Relative references are not resolved here; callers
/// resolve them against a base URL first.
///
/// # Errors
///
/// Returns a [`UrlError`] for malformed input or an unsupported scheme.
/// Callers treat either as "unusable link" and drop the URL silently.
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fragment() {
        let url = normalize_url("https://example.com/page#section").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_strips_only_the_fragment() {
        let url = normalize_url("https://example.com/a/b?q=1&r=2#frag").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a/b?q=1&r=2");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_url("https://Example.com/Page?b=2&a=1").unwrap();
        let twice = normalize_url(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_accepts_http_https_file() {
        assert!(normalize_url("http://example.com/").is_ok());
        assert!(normalize_url("https://example.com/").is_ok());
        assert!(normalize_url("file:///tmp/page.html").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for raw in [
            "ftp://example.com/file",
            "javascript:void(0)",
            "mailto:user@example.com",
            "data:text/html,<p>hi</p>",
        ] {
            let err = normalize_url(raw).unwrap_err();
            assert!(matches!(err, UrlError::UnsupportedScheme(_)), "{raw}");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        let err = normalize_url("not a url").unwrap_err();
        assert!(matches!(err, UrlError::Parse(_)));
    }

    #[test]
    fn test_fragment_only_difference_collapses() {
        let a = normalize_url("https://example.com/page#one").unwrap();
        let b = normalize_url("https://example.com/page#two").unwrap();
        assert_eq!(a, b);
    }
}
