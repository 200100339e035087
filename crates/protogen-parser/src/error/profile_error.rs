//! Errors raised while loading and validating profiles.

use thiserror::Error;

use crate::error::ErrorCode;

/// An invalid profile or profile file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile `{profile}` uses unsupported mode `{mode}`")]
    UnsupportedMode { profile: String, mode: String },

    #[error("profile `{profile}` uses unknown transform `{name}` for `{field}`")]
    UnknownTransform {
        profile: String,
        field: String,
        name: String,
    },

    #[error("profile `{profile}` does not declare a package")]
    MissingPackage { profile: String },

    #[error("profile `{profile}` declares invalid package `{package}`")]
    InvalidPackage { profile: String, package: String },

    #[error("profile `{0}` not found")]
    NotFound(String),

    #[error("profile file declares no profiles")]
    Empty,
}

impl ProfileError {
    /// Returns the error code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedMode { .. } => ErrorCode::E200,
            Self::UnknownTransform { .. } => ErrorCode::E201,
            Self::MissingPackage { .. } | Self::InvalidPackage { .. } => ErrorCode::E202,
            Self::NotFound(_) => ErrorCode::E203,
            Self::Empty => ErrorCode::E204,
        }
    }

    /// Returns help text describing how to fix the error, if any.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::UnsupportedMode { .. } => Some("the only supported mode is `protobuf`".to_string()),
            Self::UnknownTransform { .. } => Some(
                "supported transforms: pascal-case, camel-case, snake-case, kebab-case, upper-case, lower-case"
                    .to_string(),
            ),
            Self::MissingPackage { .. } => {
                Some("set `options.package` or pass `--package`".to_string())
            }
            Self::InvalidPackage { .. } => Some(
                "a package is one or more identifiers separated by dots, e.g. `petstore.v1`"
                    .to_string(),
            ),
            Self::NotFound(_) | Self::Empty => None,
        }
    }
}
