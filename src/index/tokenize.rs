//! Tokenization shared by the indexer and the query engine
//!
//! Both sides must tokenize identically or query weights would not line up
//! with document postings.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid regex"));

/// Splits text into case-folded alphanumeric runs
///
/// Everything that is not an ASCII letter or digit separates tokens;
/// accented or non-Latin characters act as separators after case folding.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    TOKEN
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(tokenize("Cats LOVE Mice"), vec!["cats", "love", "mice"]);
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(
            tokenize("don't-stop, now!"),
            vec!["don", "t", "stop", "now"]
        );
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(tokenize("http2 and tls1.3"), vec!["http2", "and", "tls1", "3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
        assert!(tokenize("!!! ???").is_empty());
    }

    #[test]
    fn test_non_ascii_separates() {
        assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
    }
}
