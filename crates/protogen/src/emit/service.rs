//! Service blocks and rpc signatures.

use std::borrow::Cow;

use protogen_core::{
    code::CodeWriter,
    data_type::DataTypeKind,
    definition::{Definition, Operation, Service},
};

/// Returns the services in ascending byte-wise order of their names.
pub fn sorted_services(definition: &Definition) -> Vec<(&str, &Service)> {
    let mut services: Vec<_> = definition
        .services()
        .iter()
        .map(|(name, service)| (name.as_str(), service))
        .collect();
    services.sort_by(|(a, _), (b, _)| a.cmp(b));
    services
}

/// Returns the request message of an operation.
///
/// An operation whose only parameter is a model reference takes that model
/// directly. Every other operation takes `<OperationName>Request`, whether or
/// not such a message is declared.
pub fn request_type(operation: &Operation) -> Cow<'_, str> {
    match operation.parameters() {
        [parameter] => match parameter.data_type().complex_name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("{}Request", operation.name())),
        },
        _ => Cow::Owned(format!("{}Request", operation.name())),
    }
}

/// Returns the response message of an operation, or `None` if it has none.
///
/// The first success response with a data type decides, scanning responses
/// in declaration order. Scalar responses are wrapped in a message named
/// after the operation.
pub fn return_type(operation: &Operation) -> Option<&str> {
    let data_type = operation.success_data_types().next()?;
    let name = match data_type.kind() {
        DataTypeKind::Primitive { .. } => operation.name(),
        DataTypeKind::Complex { name } | DataTypeKind::Enum { name } => name.as_str(),
    };
    Some(name)
}

/// Returns the `rpc` line of an operation.
pub fn rpc_signature(operation: &Operation) -> String {
    let name = operation.name();
    let request = request_type(operation);
    match return_type(operation) {
        Some(response) => format!("rpc {name}({request}) returns ({response}) {{}}"),
        None => format!("rpc {name}({request}) returns {{}}"),
    }
}

/// Emits one `service` block per service, separated by blank lines.
pub fn emit_services<W: CodeWriter>(writer: &mut W, services: &[(&str, &Service)]) {
    writer.repeat(services, |w, (name, service), i| {
        w.blank(i > 0)
            .start_block(format!("service {name}"))
            .repeat(service.operations(), |w, operation, j| {
                w.blank(j > 0).line(rpc_signature(operation));
            })
            .end_block();
    });
}

#[cfg(test)]
mod tests {
    use protogen_core::{
        code::BlockWriter,
        data_type::{DataType, PrimitiveKind},
        definition::{Parameter, Response},
    };

    use super::*;

    fn string() -> DataType {
        DataType::primitive(PrimitiveKind::String, None)
    }

    #[test]
    fn test_request_type_without_parameters() {
        assert_eq!(request_type(&Operation::new("listPets")), "listPetsRequest");
    }

    #[test]
    fn test_request_type_single_complex_parameter() {
        let op = Operation::new("addPet").with_parameter(Parameter::new("body", DataType::complex("Pet")));
        assert_eq!(request_type(&op), "Pet");
    }

    #[test]
    fn test_request_type_single_array_of_models() {
        let op = Operation::new("addPets")
            .with_parameter(Parameter::new("body", DataType::complex("Pet").into_array()));
        assert_eq!(request_type(&op), "Pet");
    }

    #[test]
    fn test_request_type_single_primitive_parameter() {
        let op = Operation::new("getPet").with_parameter(Parameter::new("id", string()));
        assert_eq!(request_type(&op), "getPetRequest");
    }

    #[test]
    fn test_request_type_single_enum_parameter() {
        let op = Operation::new("findByStatus")
            .with_parameter(Parameter::new("status", DataType::enumeration("Status")));
        assert_eq!(request_type(&op), "findByStatusRequest");
    }

    #[test]
    fn test_request_type_several_parameters() {
        let op = Operation::new("updatePet")
            .with_parameter(Parameter::new("body", DataType::complex("Pet")))
            .with_parameter(Parameter::new("id", string()));
        assert_eq!(request_type(&op), "updatePetRequest");
    }

    #[test]
    fn test_return_type_none() {
        assert_eq!(return_type(&Operation::new("ping")), None);

        let op = Operation::new("deletePet")
            .with_response("204", Response::empty())
            .with_response("404", Response::new(DataType::complex("Error")))
            .with_response("default", Response::new(DataType::complex("Error")));
        assert_eq!(return_type(&op), None);
    }

    #[test]
    fn test_return_type_complex() {
        let op = Operation::new("getPet")
            .with_response("200", Response::new(DataType::complex("Pet")));
        assert_eq!(return_type(&op), Some("Pet"));
    }

    #[test]
    fn test_return_type_primitive_is_wrapped() {
        let op = Operation::new("countPets").with_response("200", Response::new(string()));
        assert_eq!(return_type(&op), Some("countPets"));
    }

    #[test]
    fn test_return_type_enum() {
        let op = Operation::new("getStatus")
            .with_response("200", Response::new(DataType::enumeration("Status")));
        assert_eq!(return_type(&op), Some("Status"));
    }

    #[test]
    fn test_return_type_scans_in_declaration_order() {
        let op = Operation::new("createPet")
            .with_response("201", Response::new(DataType::complex("Created")))
            .with_response("200", Response::new(DataType::complex("Pet")));
        assert_eq!(return_type(&op), Some("Created"));
    }

    #[test]
    fn test_return_type_skips_success_without_body() {
        let op = Operation::new("getPet")
            .with_response("204", Response::empty())
            .with_response("200", Response::new(DataType::complex("Pet")));
        assert_eq!(return_type(&op), Some("Pet"));
    }

    #[test]
    fn test_rpc_signature() {
        let op = Operation::new("getPet").with_response("200", Response::new(string()));
        assert_eq!(rpc_signature(&op), "rpc getPet(getPetRequest) returns (getPet) {}");

        let op = Operation::new("ping");
        assert_eq!(rpc_signature(&op), "rpc ping(pingRequest) returns {}");
    }

    #[test]
    fn test_sorted_services_are_byte_wise() {
        let definition = Definition::default()
            .with_service("beta", Service::default())
            .with_service("Zeta", Service::default())
            .with_service("Alpha", Service::default());

        let names: Vec<_> = sorted_services(&definition)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Alpha", "Zeta", "beta"]);
    }

    #[test]
    fn test_emit_services() {
        let definition = Definition::default()
            .with_service(
                "UserService",
                Service::default().with_operation(Operation::new("getUser")),
            )
            .with_service(
                "PetService",
                Service::default()
                    .with_operation(Operation::new("listPets"))
                    .with_operation(Operation::new("getPet")),
            );

        let mut writer = BlockWriter::new();
        emit_services(&mut writer, &sorted_services(&definition));

        assert_eq!(
            writer.finish(),
            "service PetService {\n    \
             rpc listPets(listPetsRequest) returns {}\n\n    \
             rpc getPet(getPetRequest) returns {}\n\
             }\n\
             \n\
             service UserService {\n    \
             rpc getUser(getUserRequest) returns {}\n\
             }\n"
        );
    }
}
