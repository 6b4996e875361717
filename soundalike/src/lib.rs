//! soundalike crate root
//!
//! Collaborator glue around `soundalike-core`: the supported-language
//! catalogue with glossary links, the dictionary download path, and the CLI
//! binary. The phonetic engine itself (segmentation, distance, ranking)
//! lives entirely in the core crate and is re-exported here for convenience.

pub mod fetch;
pub mod languages;

pub use fetch::{load_dictionary_file, DictionarySource, DEFAULT_BASE_URL};
pub use languages::{find_language, wiktionary_subdomain, wiktionary_url, Language, LANGUAGES};

// Convenience re-exports for common core types used by callers.
pub use soundalike_core::{
    search, similarity, Config, Dictionary, DictionaryEntry, Engine, SearchError, SearchResult,
};
