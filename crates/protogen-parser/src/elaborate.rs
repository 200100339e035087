//! Elaboration of raw JSON structures into the typed definition model.
//!
//! This is where loosely-typed property shapes become [`DataType`]s. Every
//! property, parameter, and response type goes through [`data_type`], which
//! either picks exactly one variant or fails with a [`SchemaError`] that
//! records where the property lives and what it looked like.

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

use protogen_core::{
    data_type::{DataType, PrimitiveKind},
    definition::{Definition, Enum, Model, Operation, Parameter, Response, Service},
};

use crate::{
    error::{SchemaError, SchemaErrorKind},
    raw::{Object, RawDataType, RawDefinition, RawOperation},
};

/// Elaborate a raw definition into a typed [`Definition`].
///
/// # Errors
///
/// Returns the first [`SchemaError`] encountered, in declaration order:
/// models first, then services.
pub fn elaborate(raw: RawDefinition) -> Result<Definition, SchemaError> {
    let RawDefinition {
        services,
        models,
        enums,
    } = raw;

    let models = models
        .into_iter()
        .map(|(name, properties)| {
            let model = elaborate_model(&name, properties)?;
            Ok((name, model))
        })
        .collect::<Result<IndexMap<_, _>, SchemaError>>()?;

    let services = services
        .into_iter()
        .map(|(name, operations)| {
            let service = elaborate_service(&name, operations)?;
            Ok((name, service))
        })
        .collect::<Result<IndexMap<_, _>, SchemaError>>()?;

    let enums: IndexMap<_, _> = enums
        .into_iter()
        .map(|(name, values)| (name, Enum::new(values)))
        .collect();

    debug!(
        services_count = services.len(),
        models_count = models.len(),
        enums_count = enums.len();
        "Definition elaborated"
    );

    Ok(Definition::new(services, models, enums))
}

fn elaborate_model(name: &str, properties: IndexMap<String, Value>) -> Result<Model, SchemaError> {
    let properties = properties
        .into_iter()
        .map(|(property, value)| {
            let path = format!("models.{name}.{property}");
            let data_type = data_type(&value, &path)?;
            Ok((property, data_type))
        })
        .collect::<Result<IndexMap<_, _>, SchemaError>>()?;

    trace!(model = name, properties_count = properties.len(); "Model elaborated");
    Ok(Model::new(properties))
}

fn elaborate_service(
    name: &str,
    operations: IndexMap<String, Object<RawOperation>>,
) -> Result<Service, SchemaError> {
    let operations = operations
        .into_iter()
        .map(|(operation, raw)| {
            let path = format!("services.{name}.{operation}");
            elaborate_operation(&path, operation, raw.into_inner())
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    Ok(Service::new(operations))
}

fn elaborate_operation(
    path: &str,
    name: String,
    raw: RawOperation,
) -> Result<Operation, SchemaError> {
    let mut operation = Operation::new(name);

    for (index, parameter) in raw.parameters.into_iter().enumerate() {
        let parameter = parameter.into_inner();
        let path = format!("{path}.parameters[{index}].dataType");
        let data_type = data_type(&parameter.data_type, &path)?;
        operation = operation.with_parameter(Parameter::new(parameter.name, data_type));
    }

    for (status, response) in raw.responses {
        let response = match response.into_inner().data_type {
            Some(value) => {
                let path = format!("{path}.responses.{status}.dataType");
                Response::new(data_type(&value, &path)?)
            }
            None => Response::empty(),
        };
        operation = operation.with_response(status, response);
    }

    Ok(operation)
}

/// Decide which variant a raw property type is.
///
/// Precedence when several discriminants are present is primitive, then
/// complex, then enum. Empty strings count as absent.
pub fn data_type(value: &Value, path: &str) -> Result<DataType, SchemaError> {
    let missing = || SchemaError::new(SchemaErrorKind::MissingDiscriminant, path, value.clone());

    if !value.is_object() {
        return Err(missing());
    }
    let raw = RawDataType::deserialize(value).map_err(|err| {
        SchemaError::new(
            SchemaErrorKind::InvalidField(err.to_string()),
            path,
            value.clone(),
        )
    })?;

    let non_empty = |field: Option<String>| field.filter(|s| !s.is_empty());
    let is_array = raw.is_array.unwrap_or(false);

    let data_type = if let Some(primitive) = non_empty(raw.primitive) {
        let kind = primitive.parse::<PrimitiveKind>().map_err(|_| {
            SchemaError::new(
                SchemaErrorKind::UnknownPrimitive(primitive.clone()),
                path,
                value.clone(),
            )
        })?;
        DataType::primitive(kind, non_empty(raw.sub_type).as_deref())
    } else if let Some(complex) = non_empty(raw.complex) {
        DataType::complex(complex)
    } else if let Some(enumeration) = non_empty(raw.enumeration) {
        DataType::enumeration(enumeration)
    } else {
        return Err(missing());
    };

    Ok(data_type.with_array(is_array))
}
