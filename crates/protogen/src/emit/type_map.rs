//! Mapping of definition data types to proto3 type names.

use protogen_core::data_type::{DataType, DataTypeKind, PrimitiveKind};

/// Returns the proto3 type of a property, prefixed with `repeated` for arrays.
pub fn type_name(data_type: &DataType) -> String {
    let name = match data_type.kind() {
        DataTypeKind::Primitive { kind, sub_type } => {
            primitive_type_name(*kind, sub_type.as_deref())
        }
        DataTypeKind::Complex { name } | DataTypeKind::Enum { name } => name.as_str(),
    };

    if data_type.is_array() {
        format!("repeated {name}")
    } else {
        name.to_string()
    }
}

/// Returns the proto3 type of a primitive kind refined by its sub-type.
///
/// Numbers pass their sub-type through unchanged, so `float` stays `float`
/// and an unusual format ends up verbatim in the output.
pub fn primitive_type_name(kind: PrimitiveKind, sub_type: Option<&str>) -> &str {
    match kind {
        PrimitiveKind::Integer => match sub_type {
            Some("int64") => "int64",
            Some("int32") => "int32",
            Some(_) | None => "int32",
        },
        PrimitiveKind::Number => sub_type.unwrap_or("double"),
        PrimitiveKind::String => match sub_type {
            Some("date-time") | Some("date") => "DateTime",
            Some(_) | None => "string",
        },
        PrimitiveKind::Boolean => "bool",
        PrimitiveKind::File | PrimitiveKind::Object => "object",
        PrimitiveKind::Array => "object[]",
    }
}
