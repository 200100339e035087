//! Error system for the protogen parser.
//!
//! Every failure while loading a definition or a profile is a [`ParseError`]:
//!
//! - [`ParseError::Syntax`] - the input is not JSON, or not the expected shape
//! - [`ParseError::Schema`] - a property type could not be understood ([`SchemaError`])
//! - [`ParseError::Profile`] - a profile is invalid ([`ProfileError`])
//!
//! Each error maps to a stable [`ErrorCode`] and may carry help text.
//!
//! # Example
//!
//! ```
//! # use protogen_parser::error::{ErrorCode, ParseError};
//! let err = protogen_parser::parse_definition(r#"{"models": {"Pet": {"id": {}}}}"#)
//!     .unwrap_err();
//!
//! assert!(matches!(err, ParseError::Schema(_)));
//! assert_eq!(err.code(), ErrorCode::E100);
//! ```

mod error_code;
mod profile_error;
mod schema_error;

pub use error_code::ErrorCode;
pub use profile_error::ProfileError;
pub use schema_error::{SchemaError, SchemaErrorKind};

use serde_json::error::Category;
use thiserror::Error;

/// Error type for loading definitions and profiles.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl ParseError {
    /// Returns the error code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(err) => match err.classify() {
                Category::Data => ErrorCode::E002,
                Category::Io | Category::Syntax | Category::Eof => ErrorCode::E001,
            },
            Self::Schema(err) => err.code(),
            Self::Profile(err) => err.code(),
        }
    }

    /// Returns help text describing how to fix the error, if any.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::Syntax(_) => None,
            Self::Schema(err) => Some(err.help()),
            Self::Profile(err) => err.help(),
        }
    }

    /// Returns the 1-based line and column of a syntax error.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Syntax(err) if err.line() > 0 => Some((err.line(), err.column())),
            Self::Syntax(_) | Self::Schema(_) | Self::Profile(_) => None,
        }
    }
}
