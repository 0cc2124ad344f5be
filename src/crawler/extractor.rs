//! Text and link extraction from fetched HTML
//!
//! HTML parsing itself is delegated to the `scraper` crate; this module
//! decides what counts as visible text and which outbound links survive.

use crate::urls::normalize_url;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Elements whose contents never count as page text
const STRIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "svg", "img",
];

/// The extracted content of one page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Page title; empty when the document has none
    pub title: String,

    /// Visible text with whitespace runs collapsed to single spaces
    pub text: String,

    /// Outbound links, resolved against the page URL and normalized
    pub links: Vec<Url>,
}

/// Extracts title, visible text, and outbound links from an HTML body
///
/// Links are resolved against `base_url` and passed through the normalizer;
/// anything unusable (unsupported scheme, malformed) is dropped here.
/// Duplicate links within one page are kept — the frontier's seen-set
/// collapses them.
pub fn extract(html: &str, base_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        title: extract_title(&document),
        text: extract_text(&document),
        links: extract_links(&document, base_url),
    }
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_text(document: &Html) -> String {
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);
    // Collapse every whitespace run to a single space.
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            Node::Element(el) => {
                if STRIPPED_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}

/// Resolves one href to a normalized absolute URL, or drops it
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    // Fast path for link kinds the normalizer would reject anyway.
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    normalize_url(absolute.as_str()).ok()
}
