//! Raw dictionary download.
//!
//! Dictionaries come from the open-dict-data ipa-dict repository as one
//! plain-text file per language (`word<TAB>ipa[, ipa...]` records). Fetching
//! is the only networked step in the system: the body is parsed into an
//! immutable `Dictionary` snapshot and the connection is done with.
//!
//! Uses the `reqwest` blocking client - no async runtime needed.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use soundalike_core::{utils, Dictionary};
use tracing::{info, warn};

/// Raw file root of the open-dict-data ipa-dict repository.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/open-dict-data/ipa-dict/master/data";

/// Where and how to download per-language dictionaries.
#[derive(Debug, Clone)]
pub struct DictionarySource {
    base_url: String,
    timeout_ms: u64,
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            // Dictionaries run to a few megabytes; be generous.
            timeout_ms: 30_000,
        }
    }
}

impl DictionarySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different file root (mirror or test server).
    pub fn with_base_url<T: Into<String>>(base_url: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Set the request timeout in milliseconds.
    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    /// Download URL for a language code.
    pub fn url_for(&self, code: &str) -> String {
        format!("{}/{}.txt", self.base_url, code)
    }

    /// Download and parse the dictionary for a language code.
    ///
    /// Malformed lines are dropped by the parser; an empty result (bad code,
    /// empty file) is reported as an error since every supported language
    /// ships a non-empty dictionary.
    pub fn fetch(&self, code: &str) -> Result<Dictionary> {
        let url = self.url_for(code);
        info!(%url, "fetching pronunciation dictionary");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .context("building http client")?;

        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("requesting {url}"))?;

        if !response.status().is_success() {
            bail!("dictionary download for {code} failed: HTTP {}", response.status());
        }

        let body = response
            .text()
            .with_context(|| format!("reading body of {url}"))?;

        let dictionary = Dictionary::from_text(&utils::normalize(&body));
        if dictionary.is_empty() {
            warn!(code, "downloaded dictionary parsed to zero entries");
            bail!("dictionary for {code} contains no usable entries");
        }

        info!(code, entries = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }
}

/// Parse a dictionary from a local file in the same raw format.
pub fn load_dictionary_file<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading dictionary file {}", path.display()))?;

    let dictionary = Dictionary::from_text(&utils::normalize(&body));
    if dictionary.is_empty() {
        bail!("dictionary file {} contains no usable entries", path.display());
    }

    info!(path = %path.display(), entries = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}
