//! Property and parameter data types.
//!
//! A [`DataType`] describes the type of a model property, an operation
//! parameter, or an operation response. It is an explicit tagged union: every
//! value is exactly one of a primitive scalar, a reference to a declared model,
//! or a reference to a declared enum. Every variant can additionally be marked
//! as an array.
//!
//! # Example
//!
//! ```
//! # use protogen_core::data_type::{DataType, PrimitiveKind};
//! let id = DataType::primitive(PrimitiveKind::Integer, Some("int64"));
//! let tags = DataType::primitive(PrimitiveKind::String, None).into_array();
//! let owner = DataType::complex("User");
//!
//! assert!(id.is_primitive());
//! assert!(tags.is_array());
//! assert_eq!(owner.complex_name(), Some("User"));
//! ```

use std::{fmt, str::FromStr};

/// The primitive scalar kinds an API definition can declare.
///
/// The set is closed: a kind name outside this list is rejected when the
/// definition is loaded, so every consumer can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Whole numbers, refined by the `int32` / `int64` sub-types.
    Integer,
    /// Floating point numbers, refined by `float` / `double`.
    Number,
    /// Text, refined by formats such as `date-time` or `uuid`.
    String,
    /// `true` / `false`.
    Boolean,
    /// Binary file content.
    File,
    /// Free-form object without a declared model.
    Object,
    /// Untyped array.
    Array,
}

impl PrimitiveKind {
    /// All primitive kinds in declaration order.
    pub const ALL: [PrimitiveKind; 7] = [
        Self::Integer,
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::File,
        Self::Object,
        Self::Array,
    ];

    /// Returns the name of this kind as it appears in API definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::File => "file",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "boolean" => Ok(Self::Boolean),
            "file" => Ok(Self::File),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            _ => Err(format!("unknown primitive type `{s}`")),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The variant part of a [`DataType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTypeKind {
    /// A primitive scalar with an optional refinement such as `int64` or `date-time`.
    Primitive {
        kind: PrimitiveKind,
        sub_type: Option<String>,
    },
    /// A reference to a declared model.
    Complex { name: String },
    /// A reference to a declared enum.
    Enum { name: String },
}

/// The type of a property, parameter, or response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    kind: DataTypeKind,
    is_array: bool,
}

impl DataType {
    /// Creates a non-array data type from a [`DataTypeKind`].
    pub fn new(kind: DataTypeKind) -> Self {
        Self {
            kind,
            is_array: false,
        }
    }

    /// Creates a primitive data type.
    ///
    /// # Arguments
    ///
    /// * `kind` - The primitive kind.
    /// * `sub_type` - Optional refinement (e.g. `int64`, `date-time`).
    pub fn primitive(kind: PrimitiveKind, sub_type: Option<&str>) -> Self {
        Self::new(DataTypeKind::Primitive {
            kind,
            sub_type: sub_type.map(str::to_string),
        })
    }

    /// Creates a reference to a declared model.
    pub fn complex(name: impl Into<String>) -> Self {
        Self::new(DataTypeKind::Complex { name: name.into() })
    }

    /// Creates a reference to a declared enum.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(DataTypeKind::Enum { name: name.into() })
    }

    /// Returns this data type marked as an array.
    pub fn into_array(self) -> Self {
        self.with_array(true)
    }

    /// Returns this data type with the array flag set to `is_array`.
    pub fn with_array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    /// Returns the variant of this data type.
    pub fn kind(&self) -> &DataTypeKind {
        &self.kind
    }

    /// Returns `true` if the value is repeated.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Returns `true` for primitive scalars.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, DataTypeKind::Primitive { .. })
    }

    /// Returns the primitive kind, or `None` for model and enum references.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match &self.kind {
            DataTypeKind::Primitive { kind, .. } => Some(*kind),
            DataTypeKind::Complex { .. } | DataTypeKind::Enum { .. } => None,
        }
    }

    /// Returns the referenced model name, or `None` if this is not a model reference.
    pub fn complex_name(&self) -> Option<&str> {
        match &self.kind {
            DataTypeKind::Complex { name } => Some(name),
            DataTypeKind::Primitive { .. } | DataTypeKind::Enum { .. } => None,
        }
    }

    /// Returns a copy with the referenced model name rewritten by `rename`.
    ///
    /// Primitive and enum types are returned unchanged.
    pub fn map_complex_name(&self, rename: impl FnOnce(&str) -> String) -> Self {
        match &self.kind {
            DataTypeKind::Complex { name } => Self {
                kind: DataTypeKind::Complex { name: rename(name) },
                is_array: self.is_array,
            },
            DataTypeKind::Primitive { .. } | DataTypeKind::Enum { .. } => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kind_from_str() {
        assert_eq!("integer".parse(), Ok(PrimitiveKind::Integer));
        assert_eq!("boolean".parse(), Ok(PrimitiveKind::Boolean));
        assert!("int".parse::<PrimitiveKind>().is_err());
        assert!("String".parse::<PrimitiveKind>().is_err());
    }

    #[test]
    fn test_primitive_kind_names_are_parseable() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.as_str().parse::<PrimitiveKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_array_flag() {
        let ty = DataType::complex("Pet");
        assert!(!ty.is_array());
        assert!(ty.into_array().is_array());
    }

    #[test]
    fn test_accessors() {
        let ty = DataType::primitive(PrimitiveKind::String, Some("uuid"));
        assert!(ty.is_primitive());
        assert_eq!(ty.primitive_kind(), Some(PrimitiveKind::String));
        assert_eq!(ty.complex_name(), None);

        let ty = DataType::enumeration("Status");
        assert!(!ty.is_primitive());
        assert_eq!(ty.primitive_kind(), None);
        assert_eq!(ty.complex_name(), None);
    }

    #[test]
    fn test_map_complex_name() {
        let ty = DataType::complex("pet").into_array();
        let renamed = ty.map_complex_name(|name| name.to_uppercase());
        assert_eq!(renamed.complex_name(), Some("PET"));
        assert!(renamed.is_array());

        let ty = DataType::enumeration("status");
        assert_eq!(ty.map_complex_name(|name| name.to_uppercase()), ty);
    }
}
