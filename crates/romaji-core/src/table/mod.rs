//! Kana → romaji lookup table.
//!
//! The default table is embedded as TOML and parsed once into a read-only
//! global. Custom tables are plain values built with [`RomajiTable::from_toml`]
//! and handed to the segmenter explicitly.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_table_toml, TableConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

pub const SOKUON: char = 'っ';
pub const NASAL: char = 'ん';
const SOKUON_STR: &str = "っ";
const NASAL_STR: &str = "ん";

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// An ASCII letter that is not a vowel.
pub(crate) fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c.to_ascii_lowercase())
}

/// Returns the embedded default table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone)]
pub struct RomajiTable {
    entries: HashMap<String, Vec<String>>,
}

impl RomajiTable {
    /// The process-wide default table. Built on first use, never mutated.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RomajiTable::from_toml(DEFAULT_TOML).expect("embedded romaji table must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        let map = parse_table_toml(toml_str)?;
        Ok(Self {
            entries: map.into_iter().collect(),
        })
    }

    pub fn patterns(&self, cluster: &str) -> Option<&[String]> {
        self.entries.get(cluster).map(Vec::as_slice)
    }

    /// First (display default) pattern of a cluster.
    pub fn default_pattern(&self, cluster: &str) -> Option<&str> {
        self.patterns(cluster)
            .and_then(|p| p.first())
            .map(String::as_str)
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.entries.contains_key(cluster)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
