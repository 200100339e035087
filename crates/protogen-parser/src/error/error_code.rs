//! Error codes for the protogen diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - JSON errors
//! - `E1xx` - Schema errors
//! - `E2xx` - Profile errors

use std::fmt;

/// Error codes for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // JSON Errors (E0xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The input is not valid JSON or ended unexpectedly.
    E001,

    /// Unexpected structure.
    ///
    /// The input is valid JSON but a value has the wrong shape, for example
    /// `parameters` is an object instead of an array.
    E002,

    // =========================================================================
    // Schema Errors (E1xx)
    // =========================================================================
    /// Missing type discriminant.
    ///
    /// A property declares none of `primitive`, `complex`, or `enum`.
    E100,

    /// Unknown primitive type.
    ///
    /// A property declares a `primitive` kind outside the supported set:
    /// `integer`, `number`, `string`, `boolean`, `file`, `object`, `array`.
    E101,

    /// Malformed property type.
    ///
    /// A property type has a field of the wrong JSON type, for example a
    /// numeric `isArray`.
    E102,

    // =========================================================================
    // Profile Errors (E2xx)
    // =========================================================================
    /// Unsupported mode.
    E200,

    /// Unknown naming transform.
    E201,

    /// Missing or invalid package name.
    ///
    /// Package names are dot-separated identifiers such as `petstore.v1`.
    E202,

    /// Profile not found.
    E203,

    /// Empty profile file.
    E204,
}

impl ErrorCode {
    /// Returns the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // JSON errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            // Schema errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            // Profile errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // JSON errors
            ErrorCode::E001 => "malformed JSON",
            ErrorCode::E002 => "unexpected structure",
            // Schema errors
            ErrorCode::E100 => "missing type discriminant",
            ErrorCode::E101 => "unknown primitive type",
            ErrorCode::E102 => "malformed property type",
            // Profile errors
            ErrorCode::E200 => "unsupported mode",
            ErrorCode::E201 => "unknown transform",
            ErrorCode::E202 => "invalid package name",
            ErrorCode::E203 => "profile not found",
            ErrorCode::E204 => "empty profile file",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
