//! Naming transforms applied to a definition before rendering.
//!
//! Service, operation, parameter, model, and property names are rewritten
//! with the chains configured in [`Transforms`]. Model transforms are also
//! applied to every complex reference so that references keep pointing at
//! the renamed models. Enum names and enum values are left as declared.
//!
//! Two names that collapse to the same identifier after transformation are
//! not detected; the later one replaces the earlier one.

use indexmap::IndexMap;
use log::debug;

use protogen_core::{
    data_type::DataType,
    definition::{Definition, Model, Operation, Parameter, Response, Service},
    profile::{Transform, Transforms},
};

/// Apply naming transforms to every identifier of a definition.
///
/// # Example
///
/// ```
/// # use protogen_core::definition::{Definition, Model, Operation, Service};
/// # use protogen_core::data_type::{DataType, PrimitiveKind};
/// # use protogen_core::profile::Mode;
/// # use protogen_parser::apply_transforms;
/// let definition = Definition::default()
///     .with_model(
///         "pet_record",
///         Model::default().with_property("pet_id", DataType::primitive(PrimitiveKind::Integer, None)),
///     )
///     .with_service("pet_service", Service::default().with_operation(Operation::new("get_pet")));
///
/// let definition = apply_transforms(definition, &Mode::Protobuf.default_transforms());
///
/// assert!(definition.models()["PetRecord"].properties().contains_key("petId"));
/// assert_eq!(definition.services()["PetService"].operations()[0].name(), "getPet");
/// ```
pub fn apply_transforms(definition: Definition, transforms: &Transforms) -> Definition {
    let (services, models, enums) = definition.into_parts();
    let model_name = |name: &str| Transform::apply_all(transforms.model_name(), name);
    let reference = |data_type: &DataType| data_type.map_complex_name(model_name);

    let services: IndexMap<_, _> = services
        .into_iter()
        .map(|(name, service)| {
            let operations = service
                .into_operations()
                .into_iter()
                .map(|operation| transform_operation(operation, transforms, &reference))
                .collect();
            (
                Transform::apply_all(transforms.service_name(), &name),
                Service::new(operations),
            )
        })
        .collect();

    let models: IndexMap<_, _> = models
        .into_iter()
        .map(|(name, model)| {
            let properties = model
                .into_properties()
                .into_iter()
                .map(|(property, data_type)| {
                    (
                        Transform::apply_all(transforms.property_name(), &property),
                        reference(&data_type),
                    )
                })
                .collect();
            (model_name(&name), Model::new(properties))
        })
        .collect();

    debug!(
        services_count = services.len(),
        models_count = models.len();
        "Naming transforms applied"
    );

    Definition::new(services, models, enums)
}

fn transform_operation(
    operation: Operation,
    transforms: &Transforms,
    reference: &impl Fn(&DataType) -> DataType,
) -> Operation {
    let (name, parameters, responses) = operation.into_parts();
    let mut operation = Operation::new(Transform::apply_all(transforms.operation_name(), &name));

    for parameter in parameters {
        operation = operation.with_parameter(Parameter::new(
            Transform::apply_all(transforms.parameter_name(), parameter.name()),
            reference(parameter.data_type()),
        ));
    }

    for (status, response) in responses {
        let response = match response.data_type() {
            Some(data_type) => Response::new(reference(data_type)),
            None => Response::empty(),
        };
        operation = operation.with_response(status, response);
    }

    operation
}
