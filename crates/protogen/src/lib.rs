//! Protogen - Translate API definitions into proto3 schemas.
//!
//! Loading, naming transforms, and rendering of API definitions. Services
//! become `service` blocks with one `rpc` per operation, models become
//! messages, and enums become enums.

pub mod config;
pub mod emit;

mod error;

pub use protogen_core::{data_type, definition, profile};

pub use error::ProtogenError;

use log::{debug, info, trace};

use protogen_parser::{apply_transforms, validate_profile};

use config::AppConfig;
use definition::Definition;
use profile::Profile;

/// Name under which a profile passed to [`ProtoBuilder::render_proto`] is reported.
const ACTIVE_PROFILE: &str = "active";

/// Builder for parsing and rendering API definitions.
///
/// This provides an API for processing definitions through parsing,
/// naming transforms, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use protogen::{ProtoBuilder, config::AppConfig, profile::Profile};
///
/// let source = r#"{"models": {"pet": {"pet_id": {"primitive": "integer"}}}}"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ProtoBuilder::new(config);
///
/// // Parse source to the definition model
/// let definition = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render with a profile
/// let proto = builder.render_proto(&definition, &Profile::new("pets"))
///     .expect("Failed to render");
/// assert!(proto.contains("message Pet {"));
///
/// // Or use default config
/// let builder = ProtoBuilder::default();
/// ```
#[derive(Default)]
pub struct ProtoBuilder {
    config: AppConfig,
}

impl ProtoBuilder {
    /// Create a new proto builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including emission settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON API definition.
    ///
    /// Every property type is checked here; a definition that parses
    /// successfully always renders.
    ///
    /// # Arguments
    ///
    /// * `source` - Definition JSON as a string
    ///
    /// # Errors
    ///
    /// Returns `ProtogenError::Parse` for malformed JSON, an unexpected
    /// structure, or a property type that cannot be understood.
    pub fn parse(&self, source: &str) -> Result<Definition, ProtogenError> {
        info!("Parsing definition");

        let definition = protogen_parser::parse_definition(source)
            .map_err(|err| ProtogenError::new_parse_error(err, source))?;

        debug!("Definition parsed successfully");
        trace!(definition:?; "Parsed definition");

        Ok(definition)
    }

    /// Render a definition to proto3 text.
    ///
    /// The profile's naming transforms are applied first; the package name
    /// goes into the header.
    ///
    /// # Arguments
    ///
    /// * `definition` - A parsed definition
    /// * `profile` - The generation profile
    ///
    /// # Errors
    ///
    /// Returns `ProtogenError::Profile` if the profile package is missing or
    /// invalid.
    pub fn render_proto(
        &self,
        definition: &Definition,
        profile: &Profile,
    ) -> Result<String, ProtogenError> {
        validate_profile(ACTIVE_PROFILE, profile)?;
        let package = profile.options().package();

        info!(mode = profile.mode().as_str(), package; "Applying naming transforms");
        let definition = apply_transforms(definition.clone(), profile.transforms());

        info!("Rendering proto");
        let proto = emit::render(&definition, package, &self.config);

        info!(bytes = proto.len(); "Proto rendered successfully");
        Ok(proto)
    }
}
