//! Heuristic gender classification
//!
//! Pure and total over any string input: the worst case is Indeterminate,
//! never an error. Rules fire in strict priority order and the first match
//! wins; at every tier the feminine side is consulted before the masculine
//! side.

use crate::lexicon::Lexicon;
use jurados_common::db::models::Gender;

/// Outcome of classifying one name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Feminine,
    Masculine,
    Indeterminate,
}

impl Classification {
    /// The gender to persist, if the rules reached a confident answer
    pub fn gender(&self) -> Option<Gender> {
        match self {
            Classification::Feminine => Some(Gender::Feminine),
            Classification::Masculine => Some(Gender::Masculine),
            Classification::Indeterminate => None,
        }
    }
}

/// Classify a full name by its first token
pub fn classify(lexicon: &Lexicon, full_name: &str) -> Classification {
    let normalized = normalize_name(full_name);
    let Some(token) = normalized.split_whitespace().next() else {
        return Classification::Indeterminate;
    };

    // Exact lookup
    if lexicon.exact.feminine.contains(token) {
        return Classification::Feminine;
    }
    if lexicon.exact.masculine.contains(token) {
        return Classification::Masculine;
    }

    // Suffix heuristic
    if lexicon.suffixes.feminine.iter().any(|s| token.ends_with(s.as_str())) {
        return Classification::Feminine;
    }
    if lexicon.suffixes.masculine.iter().any(|s| token.ends_with(s.as_str())) {
        return Classification::Masculine;
    }

    // Final-vowel fallback
    if token.ends_with('a') {
        return Classification::Feminine;
    }
    if token.ends_with('o') {
        return Classification::Masculine;
    }

    Classification::Indeterminate
}

/// Lowercase a name, strip the diacritics Brazilian records carry, and
/// expand Latin ligatures
pub fn normalize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.trim().chars() {
        let c = c.to_lowercase().next().unwrap_or(c);
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' => result.push('a'),
            'è' | 'é' | 'ê' | 'ë' => result.push('e'),
            'ì' | 'í' | 'î' | 'ï' => result.push('i'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => result.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => result.push('u'),
            'ý' | 'ÿ' => result.push('y'),
            'ñ' => result.push('n'),
            'ç' => result.push('c'),
            'æ' => result.push_str("ae"),
            'œ' => result.push_str("oe"),
            'ß' => result.push_str("ss"),
            _ => result.push(c),
        }
    }
    result
}
