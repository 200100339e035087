//! API definition model.
//!
//! This module contains the already-parsed, already-cased API description
//! consumed by the renderer. All containers preserve insertion order: the
//! order in which services, operations, properties, and responses were
//! declared is observable in the generated output.
//!
//! # Pipeline Position
//!
//! ```text
//! Definition JSON
//!     ↓ parse (protogen-parser)
//! Definition (these types)
//!     ↓ transform (naming cases)
//! Definition
//!     ↓ render (protogen)
//! proto3 text
//! ```
//!
//! # Example
//!
//! ```
//! # use protogen_core::data_type::{DataType, PrimitiveKind};
//! # use protogen_core::definition::{Definition, Model, Operation, Response, Service};
//! let definition = Definition::default()
//!     .with_model(
//!         "Pet",
//!         Model::default()
//!             .with_property("id", DataType::primitive(PrimitiveKind::Integer, Some("int64")))
//!             .with_property("name", DataType::primitive(PrimitiveKind::String, None)),
//!     )
//!     .with_service(
//!         "PetService",
//!         Service::default().with_operation(
//!             Operation::new("getPet").with_response("200", Response::new(DataType::complex("Pet"))),
//!         ),
//!     );
//!
//! assert_eq!(definition.models().len(), 1);
//! assert_eq!(definition.services()["PetService"].operations().len(), 1);
//! ```

use indexmap::IndexMap;

use crate::data_type::DataType;

/// Root of an API description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    services: IndexMap<String, Service>,
    models: IndexMap<String, Model>,
    enums: IndexMap<String, Enum>,
}

impl Definition {
    /// Creates a definition from its three namespaces.
    pub fn new(
        services: IndexMap<String, Service>,
        models: IndexMap<String, Model>,
        enums: IndexMap<String, Enum>,
    ) -> Self {
        Self {
            services,
            models,
            enums,
        }
    }

    /// Returns services keyed by name, in declaration order.
    pub fn services(&self) -> &IndexMap<String, Service> {
        &self.services
    }

    /// Returns models keyed by name, in declaration order.
    pub fn models(&self) -> &IndexMap<String, Model> {
        &self.models
    }

    /// Returns enums keyed by name, in declaration order.
    pub fn enums(&self) -> &IndexMap<String, Enum> {
        &self.enums
    }

    /// Adds or replaces a service.
    pub fn with_service(mut self, name: impl Into<String>, service: Service) -> Self {
        self.services.insert(name.into(), service);
        self
    }

    /// Adds or replaces a model.
    pub fn with_model(mut self, name: impl Into<String>, model: Model) -> Self {
        self.models.insert(name.into(), model);
        self
    }

    /// Adds or replaces an enum.
    pub fn with_enum(mut self, name: impl Into<String>, value: Enum) -> Self {
        self.enums.insert(name.into(), value);
        self
    }

    /// Consumes the definition and returns its namespaces.
    pub fn into_parts(
        self,
    ) -> (
        IndexMap<String, Service>,
        IndexMap<String, Model>,
        IndexMap<String, Enum>,
    ) {
        (self.services, self.models, self.enums)
    }
}

/// A named group of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    operations: Vec<Operation>,
}

impl Service {
    /// Creates a service from its operations.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Returns the operations in declaration order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Appends an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Consumes the service and returns its operations.
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

/// A single callable operation of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    name: String,
    parameters: Vec<Parameter>,
    responses: IndexMap<String, Response>,
}

impl Operation {
    /// Creates an operation with no parameters and no responses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            responses: IndexMap::new(),
        }
    }

    /// Returns the operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the responses keyed by status code, in declaration order.
    ///
    /// Keys are kept verbatim; they are not guaranteed to be numeric
    /// (`default` is a common key) nor sorted.
    pub fn responses(&self) -> &IndexMap<String, Response> {
        &self.responses
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds or replaces the response for `status`.
    pub fn with_response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }

    /// Consumes the operation and returns its parts.
    pub fn into_parts(self) -> (String, Vec<Parameter>, IndexMap<String, Response>) {
        (self.name, self.parameters, self.responses)
    }

    /// Iterates over the data types of the success responses.
    ///
    /// A response qualifies when its status key is a number in `[200, 300)`
    /// and it declares a data type. Responses are yielded in declaration
    /// order, not in ascending status order.
    pub fn success_data_types(&self) -> impl Iterator<Item = &DataType> {
        self.responses
            .iter()
            .filter(|(status, _)| is_success_status(status))
            .filter_map(|(_, response)| response.data_type())
    }
}

/// Returns `true` if a response key denotes a 2xx status code.
///
/// Surrounding whitespace is ignored; non-numeric keys such as `default` or
/// `2XX` never qualify.
pub fn is_success_status(status: &str) -> bool {
    status
        .trim()
        .parse::<u16>()
        .is_ok_and(|code| (200..300).contains(&code))
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    data_type: DataType,
}

impl Parameter {
    /// Creates a parameter.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter data type.
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

/// A response entry. Responses without a body carry no data type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    data_type: Option<DataType>,
}

impl Response {
    /// Creates a response carrying a body of the given type.
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type: Some(data_type),
        }
    }

    /// Creates a response without a body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the body type, if any.
    pub fn data_type(&self) -> Option<&DataType> {
        self.data_type.as_ref()
    }
}

/// A data model: named properties in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    properties: IndexMap<String, DataType>,
}

impl Model {
    /// Creates a model from its properties.
    pub fn new(properties: IndexMap<String, DataType>) -> Self {
        Self { properties }
    }

    /// Returns the properties in declaration order.
    pub fn properties(&self) -> &IndexMap<String, DataType> {
        &self.properties
    }

    /// Adds or replaces a property.
    pub fn with_property(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.properties.insert(name.into(), data_type);
        self
    }

    /// Consumes the model and returns its properties.
    pub fn into_properties(self) -> IndexMap<String, DataType> {
        self.properties
    }
}

/// An enumeration: value names whose position is their wire value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enum {
    values: Vec<String>,
}

impl Enum {
    /// Creates an enum from its values in declaration order.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the values in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
