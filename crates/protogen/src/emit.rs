//! proto3 text emission.
//!
//! [`render`] lays out a whole file in a single pass:
//!
//! ```text
//! syntax = "proto3";
//!
//! package <name>;
//!
//! service ...          (byte-wise order)
//!
//! enum ...             (case-insensitive order)
//! message ...          (case-insensitive order)
//!
//! message <Operation>  (wrappers for scalar success responses)
//! ```
//!
//! Each section is produced by its own submodule and written through a
//! [`CodeWriter`], so nothing here deals with braces or indentation.

mod message;
mod model;
mod service;
mod type_map;

pub use message::WrapperMessage;
pub use service::{request_type, return_type, rpc_signature};
pub use type_map::{primitive_type_name, type_name};

use log::debug;

use protogen_core::{
    code::{BlockWriter, CodeWriter},
    definition::Definition,
};

use crate::config::AppConfig;

/// Render a definition as proto3 text in the given package.
pub fn render(definition: &Definition, package: &str, config: &AppConfig) -> String {
    let mut writer = BlockWriter::with_indent_width(config.emit().indent_width());

    let services = service::sorted_services(definition);
    let enums = model::sorted_enums(definition);
    let models = model::sorted_models(definition);
    let wrappers = message::wrapper_messages(&services, config.messages().deduplicate());

    let has_types = !enums.is_empty() || !models.is_empty();

    debug!(
        services_count = services.len(),
        enums_count = enums.len(),
        models_count = models.len(),
        wrapper_groups_count = wrappers.len();
        "Rendering proto file"
    );

    writer
        .line(r#"syntax = "proto3";"#)
        .blank(true)
        .line(format!("package {package};"))
        .blank(true);

    service::emit_services(&mut writer, &services);
    writer.blank(!services.is_empty() && has_types);

    model::emit_enums(&mut writer, &enums);
    writer.blank(!enums.is_empty() && !models.is_empty());
    model::emit_models(&mut writer, &models);
    writer.blank(has_types);

    writer.blank(!has_types && !wrappers.is_empty());
    message::emit_messages(&mut writer, &wrappers);

    writer.finish()
}
