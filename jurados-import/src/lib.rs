//! jurados-import - Institution CSV import pipeline
//!
//! Reads a CSV export of candidate institutions, normalizes each row, and
//! reconciles it into the jurados store by natural key (`nome`): one insert
//! or in-place update per row. Bad rows are logged and skipped; the run
//! ends with a one-line summary of what happened.
//!
//! Pipeline stages:
//! - [`csv`] - file loading, lexing, and header/row pairing
//! - [`normalize`] - required-field validation and default filling
//! - [`reconcile`] - upsert by natural key
//! - [`driver`] - the sequential batch loop
//! - [`summary`] - run counters

pub mod csv;
pub mod driver;
pub mod normalize;
pub mod reconcile;
pub mod summary;
