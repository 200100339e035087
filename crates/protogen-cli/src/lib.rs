//! Protogen CLI library
//!
//! This module contains the core CLI logic: resolving the generation profile
//! from a profile file and command-line overrides, and running a definition
//! through the [`ProtoBuilder`] pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use protogen::{ProtoBuilder, ProtogenError, profile::Profile};
use protogen_parser::{error::ProfileError, parse_profiles, validate_profile};

/// Name reported for a profile assembled from command-line flags only.
const COMMAND_LINE_PROFILE: &str = "command line";

/// Run the Protogen CLI application
///
/// This function reads the definition, resolves the profile, renders the
/// proto3 text, and writes it to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ProtogenError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Definition or profile parsing errors
/// - A missing or invalid package name
pub fn run(args: &Args) -> Result<(), ProtogenError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Generating proto"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let profile = resolve_profile(args)?;

    let builder = ProtoBuilder::new(app_config);
    let definition = builder.parse(&source)?;
    let proto = builder.render_proto(&definition, &profile)?;

    fs::write(&args.output, proto)?;

    info!(output_file = args.output; "Proto exported successfully");

    Ok(())
}

/// Build the profile to render with.
///
/// With `--profile`, the named (or first) profile of that file is used and
/// `--package` overrides its package. Without a profile file, the mode
/// defaults apply and `--package` is required.
fn resolve_profile(args: &Args) -> Result<Profile, ProtogenError> {
    let Some(path) = &args.profile else {
        if args.profile_name.is_some() {
            warn!("Ignoring --profile-name without --profile");
        }
        let package = args
            .package
            .clone()
            .ok_or_else(|| ProfileError::MissingPackage {
                profile: COMMAND_LINE_PROFILE.to_string(),
            })?;
        let profile = Profile::new(package);
        validate_profile(COMMAND_LINE_PROFILE, &profile)?;
        return Ok(profile);
    };

    info!(path; "Loading profiles");
    let profile_source = fs::read_to_string(path)?;
    let profiles = parse_profiles(&profile_source)
        .map_err(|err| ProtogenError::new_parse_error(err, profile_source.as_str()))?;

    let name = args
        .profile_name
        .as_deref()
        .or_else(|| profiles.names().next())
        .unwrap_or_default()
        .to_string();
    let mut profile = profiles.select(args.profile_name.as_deref())?.clone();
    info!(profile = name; "Using profile");

    if let Some(package) = &args.package {
        profile = profile.with_package(package.as_str());
    }
    validate_profile(&name, &profile)?;

    Ok(profile)
}
