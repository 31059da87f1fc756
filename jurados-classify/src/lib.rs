//! jurados-classify - Heuristic gender classification for juror names
//!
//! Batch pass over the `jurados` table: classify each juror's first name
//! with a layered rule system (exact lookup, suffix matching, final-vowel
//! fallback) and write the inferred `sexo` when it differs from the stored
//! value. Names the rules cannot place stay untouched.
//!
//! - [`lexicon`] - the curated name data, embedded or loaded from a file
//! - [`classifier`] - the pure name -> classification function
//! - [`pass`] - the sequential batch loop and its counters

pub mod classifier;
pub mod lexicon;
pub mod pass;
