//! Ranking query: score a whole dictionary against one query pronunciation.
//!
//! A query is either literal IPA (leading `/` or `[`, or containing an
//! IPA-only character) or a plain word that must resolve to a pronunciation
//! through the dictionary first. Every entry is then scored, filtered by the
//! similarity threshold, stably sorted and capped.

use phf::phf_set;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::distance::similarity;
use crate::Config;

/// Query-time failures. All value-returned; batch callers can match on the
/// variant to distinguish "not loaded" from "word not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("query is empty")]
    EmptyQuery,
    #[error("no dictionary loaded")]
    DictionaryEmpty,
    #[error("no pronunciation found for \"{0}\"")]
    WordNotFound(String),
}

/// One ranked hit: the matched entry, the variant that scored best, the
/// similarity percentage and the pronunciation the query resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub ipa: String,
    pub similarity: u8,
    pub query_ipa: String,
}

/// Characters that only occur in IPA transcriptions, never in the plain
/// orthography the dictionaries cover. A fixed probe, not a classifier:
/// a word wrapped in `/.../` that contains none of these still counts as
/// IPA because of the delimiter check.
static IPA_PROBE: phf::Set<char> = phf_set! {
    'ɑ', 'æ', 'ɔ', 'ə', 'ɛ', 'ɪ', 'ʊ', 'ʌ', 'ɜ', 'θ', 'ð', 'ʃ', 'ʒ', 'ŋ', 'ɹ',
};

/// Heuristic: does the query look like literal IPA rather than a word?
pub fn looks_like_ipa(query: &str) -> bool {
    query.starts_with('/')
        || query.starts_with('[')
        || query.chars().any(|c| IPA_PROBE.contains(&c))
}

/// Score one entry against the query pronunciation: best variant wins, ties
/// keep the earlier variant.
fn best_variant(query_ipa: &str, entry: &DictionaryEntry) -> (usize, u8) {
    let mut best_idx = 0;
    let mut best_score = 0;
    for (idx, ipa) in entry.ipas.iter().enumerate() {
        let score = similarity(query_ipa, ipa);
        if score > best_score {
            best_score = score;
            best_idx = idx;
        }
    }
    (best_idx, best_score)
}

/// Run a ranking query against a dictionary snapshot.
///
/// Results are filtered to `similarity > config.min_similarity` (strict),
/// sorted descending by similarity with dictionary order preserved on ties,
/// and truncated to `config.max_results`.
pub fn search(
    dict: &Dictionary,
    query: &str,
    config: &Config,
) -> Result<Vec<SearchResult>, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if dict.is_empty() {
        return Err(SearchError::DictionaryEmpty);
    }

    let query_ipa = if looks_like_ipa(query) {
        query.to_string()
    } else {
        // Plain word: resolve through the dictionary, never guess.
        match dict.lookup_word(query) {
            Some(entry) => entry.ipas[0].clone(),
            None => return Err(SearchError::WordNotFound(query.to_string())),
        }
    };

    // Per-entry scoring is independent, so it parallelizes freely; the
    // order-preserving collect keeps dictionary order for the stable sort.
    let scored: Vec<(usize, u8)> = if config.parallel_scoring {
        dict.entries()
            .par_iter()
            .map(|entry| best_variant(&query_ipa, entry))
            .collect()
    } else {
        dict.entries()
            .iter()
            .map(|entry| best_variant(&query_ipa, entry))
            .collect()
    };

    let mut results: Vec<SearchResult> = dict
        .entries()
        .iter()
        .zip(scored)
        .filter(|(_, (_, score))| *score > config.min_similarity)
        .map(|(entry, (variant_idx, score))| SearchResult {
            word: entry.word.clone(),
            ipa: entry.ipas[variant_idx].clone(),
            similarity: score,
            query_ipa: query_ipa.clone(),
        })
        .collect();

    // Stable sort: equal scores keep dictionary order.
    results.sort_by(|a, b| b.similarity.cmp(&a.similarity));
    results.truncate(config.max_results);

    debug!(query, query_ipa = %query_ipa, results = results.len(), "ranking query complete");
    Ok(results)
}
