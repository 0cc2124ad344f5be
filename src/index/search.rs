//! The query engine: cosine-similarity ranking over the inverted index

use crate::document::Document;
use crate::index::builder::term_weight;
use crate::index::tokenize::tokenize;
use crate::index::{DocId, Index, IndexError, SearchHit, SNIPPET_LEN};
use std::collections::HashMap;

/// Ranks documents against a query and returns the top `k`
///
/// The query is tokenized exactly like documents and weighted with the same
/// `(1 + ln(tf)) * idf` formula; terms absent from the index vocabulary
/// contribute nothing. Scores are the cosine similarity between the query
/// vector and each candidate document, accumulated as a sparse dot product
/// over the postings of the query's terms — only documents sharing at least
/// one query term are scored at all.
///
/// Ties on score break by ascending `doc_id` for deterministic output. An
/// empty query, a query with no known terms, or an empty index yields an
/// empty list, never an error.
///
/// # Errors
///
/// [`IndexError::DocCountMismatch`] when the index was built from a
/// collection of a different size than `documents`; ranking against the
/// wrong collection would be silently wrong, so this fails loudly.
pub fn search(
    index: &Index,
    documents: &[Document],
    query: &str,
    k: usize,
) -> Result<Vec<SearchHit>, IndexError> {
    if index.doc_norm.len() != documents.len() {
        return Err(IndexError::DocCountMismatch {
            index_docs: index.doc_norm.len(),
            collection_docs: documents.len(),
        });
    }

    let mut query_tf: HashMap<String, u32> = HashMap::new();
    for term in tokenize(query) {
        *query_tf.entry(term).or_insert(0) += 1;
    }

    let query_vec: Vec<(&String, f64)> = query_tf
        .iter()
        .filter_map(|(term, &count)| {
            let idf = index.idf.get(term)?;
            Some((term, term_weight(count, *idf)))
        })
        .collect();

    if query_vec.is_empty() {
        return Ok(Vec::new());
    }

    let sum_sq: f64 = query_vec.iter().map(|(_, w)| w * w).sum();
    let query_norm = if sum_sq > 0.0 { sum_sq.sqrt() } else { 1.0 };

    let mut dot: HashMap<DocId, f64> = HashMap::new();
    for (term, query_weight) in &query_vec {
        let Some(postings) = index.postings.get(*term) else {
            continue;
        };
        let idf = index.idf[*term];
        for posting in postings {
            let doc_weight = term_weight(posting.1, idf);
            *dot.entry(posting.0).or_insert(0.0) += query_weight * doc_weight;
        }
    }

    let mut ranked: Vec<(f64, DocId)> = dot
        .into_iter()
        .map(|(doc_id, product)| {
            let norm = index.doc_norm[doc_id as usize];
            let score = if norm > 0.0 {
                product / (query_norm * norm)
            } else {
                0.0
            };
            (score, doc_id)
        })
        .collect();

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked.truncate(k);

    Ok(ranked
        .into_iter()
        .map(|(score, doc_id)| {
            let doc = &documents[doc_id as usize];
            SearchHit {
                score: round4(score),
                url: doc.url.clone(),
                title: doc.title.clone(),
                snippet: doc.snippet(SNIPPET_LEN).to_string(),
            }
        })
        .collect())
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
