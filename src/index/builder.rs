//! Inverted-index construction
//!
//! The index stores raw term counts in its postings; idf and the dampened
//! term weights are recomputed from those counts at query time, so build
//! and query share a single source of truth for the scoring formulas.

use crate::document::Document;
use crate::index::tokenize::tokenize;
use crate::index::{DocId, Index, Posting};
use std::collections::HashMap;

/// Builds an inverted index over a complete document collection
///
/// For each document, title and text are tokenized together into a term
/// frequency map. Document frequency counts documents containing a term at
/// least once. The smoothed inverse document frequency
/// `idf(t) = ln((N + 1) / (df(t) + 0.5)) + 1` stays positive even when a
/// term occurs in every document. Per-document norms are the Euclidean
/// norms of the `(1 + ln(tf)) * idf` weight vectors, floored at 1.0 so a
/// document with no indexable terms can never divide a score by zero.
pub fn build_index(documents: &[Document]) -> Index {
    let mut tf_per_doc: Vec<HashMap<String, u32>> = Vec::with_capacity(documents.len());
    let mut df: HashMap<String, u32> = HashMap::new();

    for doc in documents {
        let mut tf: HashMap<String, u32> = HashMap::new();
        for term in tokenize(&format!("{} {}", doc.title, doc.text)) {
            *tf.entry(term).or_insert(0) += 1;
        }
        for term in tf.keys() {
            *df.entry(term.clone()).or_insert(0) += 1;
        }
        tf_per_doc.push(tf);
    }

    let n = documents.len() as f64;
    let idf: HashMap<String, f64> = df
        .iter()
        .map(|(term, &count)| {
            let value = ((n + 1.0) / (f64::from(count) + 0.5)).ln() + 1.0;
            (term.clone(), value)
        })
        .collect();

    let mut postings: HashMap<String, Vec<Posting>> = HashMap::with_capacity(df.len());
    let mut doc_norm = vec![0.0f64; documents.len()];

    for (doc_id, tf) in tf_per_doc.iter().enumerate() {
        let mut sum_sq = 0.0;
        for (term, &count) in tf {
            // Documents are walked in order, so each postings list stays
            // sorted by ascending doc_id.
            postings
                .entry(term.clone())
                .or_default()
                .push(Posting(doc_id as DocId, count));
            let w = term_weight(count, idf[term]);
            sum_sq += w * w;
        }
        doc_norm[doc_id] = if sum_sq > 0.0 { sum_sq.sqrt() } else { 1.0 };
    }

    Index {
        postings,
        idf,
        doc_norm,
    }
}

/// TF-IDF weight of a term occurring `count` times in one document or query
///
/// Log-dampened term frequency: a zero count contributes zero weight rather
/// than negative infinity.
pub(crate) fn term_weight(count: u32, idf: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        (1.0 + f64::from(count).ln()) * idf
    }
}
