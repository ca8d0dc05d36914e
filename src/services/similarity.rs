use std::cmp::Ordering;

use crate::{corpus::Corpus, models::RankedTitle};

/// Number of candidates ranked per request, before enrichment filtering
pub const FETCH_COUNT: usize = 20;

/// Number of recommendations presented to the client
pub const PRESENT_COUNT: usize = 10;

/// Cosine similarity between two vectors.
///
/// A zero-length vector (or mismatched dimensions) yields 0.0, never NaN, so
/// the result always has a total order.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Exact brute-force nearest-neighbour ranking over the corpus
pub struct SimilarityRanker<'a> {
    corpus: &'a Corpus,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Ranks every other corpus title by similarity to `title`.
    ///
    /// Returns at most `count` entries, highest score first. Equal scores keep
    /// corpus row order. Rows carrying the query title itself are excluded.
    /// An unknown title yields an empty list.
    pub fn recommend(&self, title: &str, count: usize) -> Vec<RankedTitle> {
        let Some(query_index) = self.corpus.index_of(title) else {
            return Vec::new();
        };
        let Some(query) = self.corpus.row(query_index) else {
            return Vec::new();
        };
        let query_key = title.to_lowercase();

        let mut scored: Vec<(usize, f64)> = self
            .corpus
            .entries()
            .iter()
            .enumerate()
            .filter(|(index, entry)| {
                *index != query_index && entry.title.to_lowercase() != query_key
            })
            .filter_map(|(index, _)| {
                self.corpus
                    .row(index)
                    .map(|row| (index, cosine_similarity(query, row)))
            })
            .collect();

        // Stable sort: ties stay in corpus order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(count);

        scored
            .into_iter()
            .filter_map(|(index, score)| {
                self.corpus.entry(index).map(|entry| RankedTitle {
                    index,
                    title: entry.title.clone(),
                    tmdb_id: entry.tmdb_id,
                    score,
                })
            })
            .collect()
    }
}
