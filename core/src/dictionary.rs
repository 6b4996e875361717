//! In-memory pronunciation dictionary and the raw record parser.
//!
//! The raw format is one tab-separated record per line: `word<TAB>ipa` where
//! the IPA field may hold several comma-separated pronunciation variants
//! (`teresa<TAB>/tɝˈeɪsə/, /tɝˈisə/`). Malformed lines parse to `None` and
//! are dropped during bulk construction; a bad record never aborts a load.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One dictionary record: a word and its pronunciation variants in source
/// order. `ipas` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub ipas: Vec<String>,
}

/// Split an IPA field on commas, trimming each variant and dropping empty
/// segments. Blank input yields an empty vector.
pub fn split_ipa_variants(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one raw dictionary line.
///
/// Returns `None` when the line has no tab, the word is blank, or the IPA
/// field holds no non-empty variant.
pub fn parse_dictionary_line(line: &str) -> Option<DictionaryEntry> {
    let (word, ipa_field) = line.split_once('\t')?;
    let word = word.trim();
    let ipas = split_ipa_variants(ipa_field);

    if word.is_empty() || ipas.is_empty() {
        return None;
    }

    Some(DictionaryEntry {
        word: word.to_string(),
        ipas,
    })
}

/// Immutable dictionary snapshot for one language.
///
/// Rebuilt wholesale whenever the active language changes; queries only read
/// it, so a snapshot can be shared across threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    /// Lowercased word -> index of its first entry in source order.
    by_word: AHashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from parsed entries, indexing words for
    /// case-insensitive lookup. The first occurrence of a word wins.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut by_word = AHashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_word.entry(entry.word.to_lowercase()).or_insert(idx);
        }
        Self { entries, by_word }
    }

    /// Build a snapshot from a raw dictionary file body.
    ///
    /// Blank lines are ignored; malformed lines are dropped and counted.
    pub fn from_text(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_dictionary_line(line) {
                Some(entry) => entries.push(entry),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, kept = entries.len(), "dropped malformed dictionary lines");
        }
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive word lookup; first match in dictionary order.
    pub fn lookup_word(&self, word: &str) -> Option<&DictionaryEntry> {
        self.by_word
            .get(&word.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }
}
