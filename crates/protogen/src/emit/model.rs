//! Enum and message declarations.

use protogen_core::{
    code::CodeWriter,
    definition::{Definition, Enum, Model},
};

use super::type_map::type_name;

/// Returns the enums in case-insensitive alphabetical order.
///
/// Names that only differ in case keep their declaration order.
pub fn sorted_enums(definition: &Definition) -> Vec<(&str, &Enum)> {
    let mut enums: Vec<_> = definition
        .enums()
        .iter()
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    enums.sort_by_key(|(name, _)| collation_key(name));
    enums
}

/// Returns the models in case-insensitive alphabetical order.
///
/// Names that only differ in case keep their declaration order.
pub fn sorted_models(definition: &Definition) -> Vec<(&str, &Model)> {
    let mut models: Vec<_> = definition
        .models()
        .iter()
        .map(|(name, model)| (name.as_str(), model))
        .collect();
    models.sort_by_key(|(name, _)| collation_key(name));
    models
}

/// Case-insensitive sort key for declaration names.
///
/// Punctuation sorts before digits and digits before letters, as in
/// dictionary order, so `pet_tag` comes before `pet2`. Characters of the same
/// class compare by code point.
fn collation_key(name: &str) -> Vec<(u8, char)> {
    name.to_lowercase()
        .chars()
        .map(|c| {
            let class = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (class, c)
        })
        .collect()
}

/// Emits one `enum` block per enum, separated by blank lines.
///
/// Each value is numbered by its position, starting at zero.
pub fn emit_enums<W: CodeWriter>(writer: &mut W, enums: &[(&str, &Enum)]) {
    writer.repeat(enums, |w, (name, value), i| {
        w.blank(i > 0)
            .start_block(format!("enum {name}"))
            .repeat(value.values(), |w, value, index| {
                w.line(format!("{value} = {index};"));
            })
            .end_block();
    });
}

/// Emits one `message` block per model, separated by blank lines.
///
/// Fields are numbered by their declaration position, starting at one.
pub fn emit_models<W: CodeWriter>(writer: &mut W, models: &[(&str, &Model)]) {
    writer.repeat(models, |w, (name, model), i| {
        w.blank(i > 0)
            .start_block(format!("message {name}"))
            .repeat(model.properties(), |w, (property, data_type), index| {
                w.line(format!("{} {property} = {};", type_name(data_type), index + 1));
            })
            .end_block();
    });
}
