//! Wrapper messages synthesized for scalar success responses.
//!
//! An operation whose success response is a primitive returns a message
//! named after the operation (see [`return_type`](super::service::return_type)).
//! This module declares those messages, each holding the scalar in a single
//! `value` field.

use protogen_core::{
    code::CodeWriter,
    data_type::{DataType, PrimitiveKind},
    definition::{Operation, Service, is_success_status},
};

/// A wrapper message to declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperMessage<'a> {
    name: &'a str,
    kind: PrimitiveKind,
}

impl<'a> WrapperMessage<'a> {
    /// Returns the message name, which is the operation name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the primitive kind held by the `value` field.
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}

/// Collects the wrapper messages of each service, in the given service order.
///
/// Every success response with a primitive data type yields one wrapper, so
/// an operation with several of them yields duplicates unless `deduplicate`
/// is set. Services without wrappers are left out.
pub fn wrapper_messages<'a>(
    services: &[(&'a str, &'a Service)],
    deduplicate: bool,
) -> Vec<Vec<WrapperMessage<'a>>> {
    services
        .iter()
        .map(|&(_, service)| {
            service
                .operations()
                .iter()
                .flat_map(|operation| operation_wrappers(operation, deduplicate))
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

fn operation_wrappers(operation: &Operation, deduplicate: bool) -> Vec<WrapperMessage<'_>> {
    let wrappers = operation
        .responses()
        .iter()
        .filter(|(status, _)| is_success_status(status))
        .filter_map(|(_, response)| response.data_type())
        .filter_map(DataType::primitive_kind)
        .map(|kind| WrapperMessage {
            name: operation.name(),
            kind,
        });

    if deduplicate {
        wrappers.take(1).collect()
    } else {
        wrappers.collect()
    }
}

/// Emits the wrapper messages, with a blank line between service groups.
///
/// The `value` field carries the primitive kind as declared in the
/// definition, not its mapped proto3 type.
pub fn emit_messages<W: CodeWriter>(writer: &mut W, groups: &[Vec<WrapperMessage<'_>>]) {
    writer.repeat(groups, |w, group, i| {
        w.blank(i > 0).repeat(group, |w, message, _| {
            w.start_block(format!("message {}", message.name()))
                .line(format!("{} value = 1;", message.kind()))
                .end_block();
        });
    });
}

#[cfg(test)]
mod tests {
    use protogen_core::{
        code::BlockWriter,
        definition::{Definition, Response},
    };

    use super::*;
    use crate::emit::service::sorted_services;

    fn primitive(kind: PrimitiveKind) -> Response {
        Response::new(DataType::primitive(kind, None))
    }

    fn render(definition: &Definition, deduplicate: bool) -> String {
        let services = sorted_services(definition);
        let groups = wrapper_messages(&services, deduplicate);
        let mut writer = BlockWriter::new();
        emit_messages(&mut writer, &groups);
        writer.finish()
    }

    #[test]
    fn test_primitive_success_response() {
        let definition = Definition::default().with_service(
            "PetService",
            Service::default().with_operation(
                Operation::new("getPet").with_response("200", primitive(PrimitiveKind::String)),
            ),
        );

        assert_eq!(
            render(&definition, false),
            "message getPet {\n    string value = 1;\n}\n"
        );
    }

    #[test]
    fn test_value_uses_declared_kind() {
        let definition = Definition::default().with_service(
            "PetService",
            Service::default().with_operation(
                Operation::new("countPets").with_response(
                    "200",
                    Response::new(DataType::primitive(PrimitiveKind::Integer, Some("int64"))),
                ),
            ),
        );

        assert_eq!(
            render(&definition, false),
            "message countPets {\n    integer value = 1;\n}\n"
        );
    }

    #[test]
    fn test_non_primitive_and_non_success_responses_are_skipped() {
        let definition = Definition::default().with_service(
            "PetService",
            Service::default().with_operation(
                Operation::new("getPet")
                    .with_response("200", Response::new(DataType::complex("Pet")))
                    .with_response("201", Response::new(DataType::enumeration("Status")))
                    .with_response("204", Response::empty())
                    .with_response("400", primitive(PrimitiveKind::String))
                    .with_response("default", primitive(PrimitiveKind::String)),
            ),
        );

        assert_eq!(render(&definition, false), "");
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let definition = Definition::default().with_service(
            "PetService",
            Service::default().with_operation(
                Operation::new("ping")
                    .with_response("200", primitive(PrimitiveKind::String))
                    .with_response("202", primitive(PrimitiveKind::Boolean)),
            ),
        );

        assert_eq!(
            render(&definition, false),
            "message ping {\n    string value = 1;\n}\nmessage ping {\n    boolean value = 1;\n}\n"
        );
        assert_eq!(
            render(&definition, true),
            "message ping {\n    string value = 1;\n}\n"
        );
    }

    #[test]
    fn test_service_groups_are_separated() {
        let definition = Definition::default()
            .with_service(
                "UserService",
                Service::default().with_operation(
                    Operation::new("userCount")
                        .with_response("200", primitive(PrimitiveKind::Integer)),
                ),
            )
            .with_service(
                "NoWrappers",
                Service::default().with_operation(Operation::new("noop")),
            )
            .with_service(
                "PetService",
                Service::default()
                    .with_operation(
                        Operation::new("petName")
                            .with_response("200", primitive(PrimitiveKind::String)),
                    )
                    .with_operation(
                        Operation::new("isAlive")
                            .with_response("200", primitive(PrimitiveKind::Boolean)),
                    ),
            );

        assert_eq!(
            render(&definition, false),
            "message petName {\n    string value = 1;\n}\n\
             message isAlive {\n    boolean value = 1;\n}\n\
             \n\
             message userCount {\n    integer value = 1;\n}\n"
        );
    }
}
