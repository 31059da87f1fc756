//! # Jurados Common Library
//!
//! Shared code for the juror-program batch tools including:
//! - Database bootstrap and row models
//! - Store accessors (institutions, jurors)
//! - Configuration resolution
//! - Error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
