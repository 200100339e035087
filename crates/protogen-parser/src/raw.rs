//! Loosely-typed mirror of the JSON input.
//!
//! These structures accept the JSON exactly as the upstream pipeline
//! produces it. Property types are kept as raw [`Value`]s here so that a
//! malformed property can be reported with its full structure; the
//! elaboration pass turns them into typed
//! [`DataType`](protogen_core::data_type::DataType)s.

use std::{fmt, marker::PhantomData};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor, value::MapAccessDeserializer},
};
use serde_json::Value;

/// A struct that may only be written as a JSON object.
///
/// Derived struct deserializers also accept a sequence and assign its
/// elements to fields by position. Wrapping a struct in `Object` rejects
/// anything but a map, while still streaming the fields so syntax errors
/// keep their position.
#[derive(Debug, Default)]
pub struct Object<T>(T);

impl<T> Object<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
            type Value = T;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map))
            }
        }

        deserializer
            .deserialize_map(ObjectVisitor(PhantomData))
            .map(Object)
    }
}

/// Root of a definition file.
pub type RawDefinitionFile = Object<RawDefinition>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawDefinition {
    pub services: IndexMap<String, IndexMap<String, Object<RawOperation>>>,
    pub models: IndexMap<String, IndexMap<String, Value>>,
    pub enums: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawOperation {
    pub parameters: Vec<Object<RawParameter>>,
    pub responses: IndexMap<String, Object<RawResponse>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameter {
    pub name: String,
    #[serde(default)]
    pub data_type: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawResponse {
    pub data_type: Option<Value>,
}

/// The discriminant fields of a property type.
///
/// Every field is optional at this level; deciding which variant a property
/// is, and rejecting properties that are none, happens during elaboration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDataType {
    pub primitive: Option<String>,
    pub sub_type: Option<String>,
    pub complex: Option<String>,
    #[serde(rename = "enum")]
    pub enumeration: Option<String>,
    pub is_array: Option<bool>,
}

/// Root of a profile file: profile name to profile, in declaration order.
pub type RawProfileFile = Object<IndexMap<String, Object<RawProfile>>>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub mode: Option<String>,
    pub options: Object<RawProfileOptions>,
    pub transforms: Object<RawTransforms>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawProfileOptions {
    pub package: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTransforms {
    pub service_name: Option<Vec<String>>,
    pub operation_name: Option<Vec<String>>,
    pub parameter_name: Option<Vec<String>>,
    pub model_name: Option<Vec<String>>,
    pub property_name: Option<Vec<String>>,
}
