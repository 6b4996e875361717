//! soundalike-core
//!
//! Phonetic similarity engine shared by the soundalike tools: phone
//! classification, IPA segmentation, feature-weighted edit distance and the
//! ranking query that scores a whole pronunciation dictionary against one
//! query. Everything here is pure, synchronous computation over immutable
//! snapshots; I/O (fetching raw dictionaries, presenting results) lives in
//! the `soundalike` crate.
//!
//! Public API:
//! - `phonetic_distance` / `PhoneClass` - feature-based phone distance
//! - `segment_ipa` - IPA string -> phone sequence
//! - `phonetic_levenshtein` / `similarity` - weighted alignment and score
//! - `Dictionary` / `DictionaryEntry` / `parse_dictionary_line` - records
//! - `search` / `SearchResult` / `SearchError` - the ranking query
//! - `Engine` - snapshot + LRU result cache
//! - `Config` - thresholds, caps and feature flags

use serde::{Deserialize, Serialize};

pub mod phones;
pub use phones::{classes_of, phonetic_distance, PhoneClass, PHONE_CLASSES, RELATED_CLASSES};

pub mod segment;
pub use segment::segment_ipa;

pub mod distance;
pub use distance::{phonetic_levenshtein, similarity};

pub mod dictionary;
pub use dictionary::{parse_dictionary_line, split_ipa_variants, Dictionary, DictionaryEntry};

pub mod query;
pub use query::{looks_like_ipa, search, SearchError, SearchResult};

pub mod engine;
pub use engine::Engine;

/// Ranking and presentation knobs for the search pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Results must score strictly above this (0..=100) to be kept.
    pub min_similarity: u8,

    /// Hard cap on ranked results before presentation paging.
    pub max_results: usize,

    /// Results per page in presentation layers (not enforced by the core).
    pub page_size: usize,

    /// Score dictionary entries on the rayon thread pool.
    pub parallel_scoring: bool,

    /// Maximum number of entries in the query -> results cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Exactly 30 is excluded; the filter is strict
            min_similarity: 30,
            max_results: 1000,
            page_size: 50,
            parallel_scoring: true,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize raw text (NFC) and trim whitespace.
    ///
    /// Applied to fetched dictionary bodies and user queries before they
    /// reach the tokenizer, so composed and decomposed IPA spellings of the
    /// same symbol compare equal.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
