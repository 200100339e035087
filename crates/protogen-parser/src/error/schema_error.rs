//! The SchemaError type for malformed property types.
//!
//! A [`SchemaError`] is raised when a property, parameter, or response type
//! cannot be turned into a [`DataType`](protogen_core::data_type::DataType).
//! It keeps the offending JSON structure and its location so the caller can
//! show exactly what was wrong.

use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorCode;

/// What was wrong with a property type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaErrorKind {
    #[error("cannot understand type of property")]
    MissingDiscriminant,

    #[error("cannot translate primitive type `{0}`")]
    UnknownPrimitive(String),

    #[error("malformed type of property ({0})")]
    InvalidField(String),
}

/// A property type that could not be understood.
#[derive(Debug, Clone, Error)]
#[error("{kind} `{path}`")]
pub struct SchemaError {
    kind: SchemaErrorKind,
    path: String,
    property: Value,
}

impl SchemaError {
    /// Create a new schema error.
    ///
    /// # Arguments
    ///
    /// * `kind` - What was wrong.
    /// * `path` - Dotted location of the property, e.g. `models.Pet.id`.
    /// * `property` - The offending JSON structure.
    pub fn new(kind: SchemaErrorKind, path: impl Into<String>, property: Value) -> Self {
        Self {
            kind,
            path: path.into(),
            property,
        }
    }

    /// Get what was wrong.
    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }

    /// Get the dotted location of the property.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the offending JSON structure.
    pub fn property(&self) -> &Value {
        &self.property
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SchemaErrorKind::MissingDiscriminant => ErrorCode::E100,
            SchemaErrorKind::UnknownPrimitive(_) => ErrorCode::E101,
            SchemaErrorKind::InvalidField(_) => ErrorCode::E102,
        }
    }

    /// Get help text including the offending structure.
    pub fn help(&self) -> String {
        let property = serde_json::to_string_pretty(&self.property)
            .unwrap_or_else(|_| self.property.to_string());
        match self.kind {
            SchemaErrorKind::MissingDiscriminant => format!(
                "declare one of `primitive`, `complex` or `enum` in:\n{property}"
            ),
            SchemaErrorKind::UnknownPrimitive(_) => format!(
                "use one of integer, number, string, boolean, file, object, array in:\n{property}"
            ),
            SchemaErrorKind::InvalidField(_) => format!(
                "`primitive`, `subType`, `complex` and `enum` take strings and `isArray` takes a boolean in:\n{property}"
            ),
        }
    }
}
