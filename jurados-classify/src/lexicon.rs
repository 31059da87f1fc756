//! Curated name data for the classifier
//!
//! The linguistic data lives outside the code, in a TOML artifact that is
//! embedded into the binary at compile time. An alternative file can be
//! supplied at runtime for auditing or extension; it must carry the same
//! shape as the embedded one.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const EMBEDDED_LEXICON: &str = include_str!("../data/lexicon.toml");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Name data consulted by the classifier, tier by tier
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    pub exact: ExactNames,
    pub suffixes: SuffixRules,
}

/// First names with a known gender, lowercase and diacritic-free
#[derive(Debug, Clone, Deserialize)]
pub struct ExactNames {
    pub feminine: HashSet<String>,
    pub masculine: HashSet<String>,
}

/// Name endings checked when the exact lookup misses
#[derive(Debug, Clone, Deserialize)]
pub struct SuffixRules {
    pub feminine: Vec<String>,
    pub masculine: Vec<String>,
}

impl Lexicon {
    /// The lexicon compiled into the binary
    pub fn embedded() -> Result<Lexicon, LexiconError> {
        Ok(toml::from_str(EMBEDDED_LEXICON)?)
    }

    /// Load a lexicon from a TOML file
    pub fn load(path: &Path) -> Result<Lexicon, LexiconError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
