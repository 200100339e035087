//! Error types for protogen operations.
//!
//! This module provides the main error type [`ProtogenError`] which wraps
//! the error conditions that can occur while turning a definition into
//! proto3 text.

use std::io;

use thiserror::Error;

use protogen_parser::error::{ParseError, ProfileError};

/// The main error type for protogen operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the JSON source it was raised for, so callers
/// can point at the offending location when reporting it.
#[derive(Debug, Error)]
pub enum ProtogenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProtogenError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
