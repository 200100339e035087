//! Definition and profile loader for protogen.
//!
//! This crate turns JSON input into the typed model of `protogen-core`:
//!
//! ```text
//! Definition JSON
//!     ↓ serde_json
//! raw structures
//!     ↓ elaborate (property types checked here)
//! Definition
//!     ↓ apply_transforms (naming cases from the profile)
//! Definition ready to render
//! ```
//!
//! Profiles follow a parallel path through [`parse_profiles`], which fills
//! in defaults and validates each profile.
//!
//! # Example
//!
//! ```
//! use protogen_parser::{apply_transforms, parse_definition, parse_profiles};
//!
//! let definition = parse_definition(r#"{
//!     "models": {"pet": {"pet_id": {"primitive": "integer", "subType": "int64"}}}
//! }"#).unwrap();
//! let profiles = parse_profiles(r#"{"default": {"options": {"package": "pets"}}}"#).unwrap();
//! let profile = profiles.select(None).unwrap();
//!
//! let definition = apply_transforms(definition, profile.transforms());
//! assert!(definition.models()["Pet"].properties().contains_key("petId"));
//! ```

pub mod error;

mod elaborate;
mod profile;
mod raw;
mod transform;

pub use error::ParseError;
pub use profile::{ProfileSet, parse_profiles, validate_profile};
pub use transform::apply_transforms;

use log::debug;

use protogen_core::definition::Definition;

use raw::RawDefinitionFile;

/// Parse a definition from JSON text.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed JSON or an unexpected
/// structure, and [`ParseError::Schema`] for a property type that cannot be
/// understood.
pub fn parse_definition(source: &str) -> Result<Definition, ParseError> {
    let raw = serde_json::from_str::<RawDefinitionFile>(source)?.into_inner();
    debug!(
        services_count = raw.services.len(),
        models_count = raw.models.len(),
        enums_count = raw.enums.len();
        "Definition JSON decoded"
    );

    let definition = elaborate::elaborate(raw)?;
    Ok(definition)
}
