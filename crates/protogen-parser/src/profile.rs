//! Profile loading, defaulting, and validation.
//!
//! A profile file is a JSON object mapping profile names to profiles. Each
//! profile is resolved on load: a missing `mode` becomes `protobuf`, missing
//! transform lists are filled from the mode defaults, and a declared package
//! name is checked. A profile without a package loads successfully; it is
//! rejected by [`validate_profile`] unless a package is supplied later.
//!
//! # Example
//!
//! ```
//! # use protogen_parser::parse_profiles;
//! let profiles = parse_profiles(r#"{
//!     "default": {"mode": "protobuf", "options": {"package": "petstore.v1"}}
//! }"#).unwrap();
//!
//! let profile = profiles.select(None).unwrap();
//! assert_eq!(profile.options().package(), "petstore.v1");
//! ```

use indexmap::IndexMap;
use log::{debug, trace};

use protogen_core::profile::{Mode, Profile, ProfileOptions, Transform, Transforms};

use crate::{
    error::{ParseError, ProfileError},
    raw::{RawProfile, RawProfileFile, RawTransforms},
};

/// Resolved profiles in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: IndexMap<String, Profile>,
}

impl ProfileSet {
    /// Select a profile by name, or the first declared profile if `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] for an unknown name and
    /// [`ProfileError::Empty`] when the set has no profiles.
    pub fn select(&self, name: Option<&str>) -> Result<&Profile, ProfileError> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .ok_or_else(|| ProfileError::NotFound(name.to_string())),
            None => self
                .profiles
                .first()
                .map(|(_, profile)| profile)
                .ok_or(ProfileError::Empty),
        }
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Iterate over the profile names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Parse and resolve every profile in a profile file.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed JSON and
/// [`ParseError::Profile`] for the first invalid profile.
pub fn parse_profiles(source: &str) -> Result<ProfileSet, ParseError> {
    let raw = serde_json::from_str::<RawProfileFile>(source)?.into_inner();
    if raw.is_empty() {
        return Err(ProfileError::Empty.into());
    }

    let profiles = raw
        .into_iter()
        .map(|(name, raw)| {
            let profile = resolve_profile(&name, raw.into_inner())?;
            Ok((name, profile))
        })
        .collect::<Result<IndexMap<_, _>, ProfileError>>()?;

    debug!(profiles_count = profiles.len(); "Profiles loaded");
    Ok(ProfileSet { profiles })
}

fn resolve_profile(name: &str, raw: RawProfile) -> Result<Profile, ProfileError> {
    let mode = match raw.mode.as_deref() {
        None => Mode::default(),
        Some(mode) => mode
            .parse::<Mode>()
            .map_err(|_| ProfileError::UnsupportedMode {
                profile: name.to_string(),
                mode: mode.to_string(),
            })?,
    };

    let transforms =
        resolve_transforms(name, raw.transforms.into_inner(), mode.default_transforms())?;
    let package = raw.options.into_inner().package.unwrap_or_default();
    let profile = Profile::from_parts(mode, ProfileOptions::new(package), transforms);

    // The package may still be supplied by the caller, so only a declared
    // one is checked here.
    if !profile.options().package().is_empty() {
        validate_profile(name, &profile)?;
    }
    trace!(profile = name, mode = mode.as_str(); "Profile resolved");
    Ok(profile)
}

fn resolve_transforms(
    profile: &str,
    raw: RawTransforms,
    defaults: Transforms,
) -> Result<Transforms, ProfileError> {
    let resolve = |field: &str, names: Option<Vec<String>>, default: &[Transform]| {
        match names {
            None => Ok(default.to_vec()),
            Some(names) => names
                .iter()
                .map(|name| {
                    name.parse::<Transform>()
                        .map_err(|_| ProfileError::UnknownTransform {
                            profile: profile.to_string(),
                            field: field.to_string(),
                            name: name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>(),
        }
    };

    Ok(Transforms::none()
        .with_service_name(resolve(
            "serviceName",
            raw.service_name,
            defaults.service_name(),
        )?)
        .with_operation_name(resolve(
            "operationName",
            raw.operation_name,
            defaults.operation_name(),
        )?)
        .with_parameter_name(resolve(
            "parameterName",
            raw.parameter_name,
            defaults.parameter_name(),
        )?)
        .with_model_name(resolve("modelName", raw.model_name, defaults.model_name())?)
        .with_property_name(resolve(
            "propertyName",
            raw.property_name,
            defaults.property_name(),
        )?))
}

/// Check that a resolved profile can be rendered.
///
/// The package must be one or more identifiers (`[A-Za-z_][A-Za-z0-9_]*`)
/// separated by single dots.
///
/// # Errors
///
/// Returns [`ProfileError::MissingPackage`] for an empty package and
/// [`ProfileError::InvalidPackage`] for a malformed one.
pub fn validate_profile(name: &str, profile: &Profile) -> Result<(), ProfileError> {
    let package = profile.options().package();
    if package.is_empty() {
        return Err(ProfileError::MissingPackage {
            profile: name.to_string(),
        });
    }
    if !is_valid_package(package) {
        return Err(ProfileError::InvalidPackage {
            profile: name.to_string(),
            package: package.to_string(),
        });
    }
    Ok(())
}

fn is_valid_package(package: &str) -> bool {
    package.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_select_first_profile_by_default() {
        let profiles = parse_profiles(
            r#"{
                "second": {"options": {"package": "b"}},
                "first": {"options": {"package": "a"}}
            }"#,
        )
        .unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles.names().collect::<Vec<_>>(), ["second", "first"]);
        assert_eq!(profiles.select(None).unwrap().options().package(), "b");
        assert_eq!(profiles.select(Some("first")).unwrap().options().package(), "a");
        assert_eq!(
            profiles.select(Some("third")).unwrap_err(),
            ProfileError::NotFound("third".to_string())
        );
    }

    #[test]
    fn test_defaults_are_filled() {
        let profiles = parse_profiles(
            r#"{"default": {"options": {"package": "pets"}, "transforms": {"modelName": ["snake-case"]}}}"#,
        )
        .unwrap();
        let profile = profiles.get("default").unwrap();

        assert_eq!(profile.mode(), Mode::Protobuf);
        assert_eq!(profile.transforms().model_name(), &[Transform::SnakeCase]);
        assert_eq!(profile.transforms().service_name(), &[Transform::PascalCase]);
        assert_eq!(profile.transforms().property_name(), &[Transform::CamelCase]);
    }

    #[test]
    fn test_explicit_empty_transforms_are_kept() {
        let profiles = parse_profiles(
            r#"{"default": {"options": {"package": "pets"}, "transforms": {"serviceName": []}}}"#,
        )
        .unwrap();

        assert!(profiles.select(None).unwrap().transforms().service_name().is_empty());
    }

    #[test]
    fn test_empty_profile_file() {
        let err = parse_profiles("{}").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E204);
    }

    #[test]
    fn test_array_profiles_rejected() {
        for source in [
            r#"[{"options": {"package": "a"}}]"#,
            r#"{"p": []}"#,
            r#"{"p": {"options": ["a"]}}"#,
            r#"{"p": {"options": {"package": "a"}, "transforms": [["pascal-case"]]}}"#,
        ] {
            let err = parse_profiles(source).unwrap_err();
            assert_eq!(err.code(), ErrorCode::E002, "{source}");
        }
    }

    #[test]
    fn test_unsupported_mode() {
        let err = parse_profiles(r#"{"p": {"mode": "swift", "options": {"package": "a"}}}"#)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::E200);
    }

    #[test]
    fn test_unknown_transform() {
        let err = parse_profiles(
            r#"{"p": {"options": {"package": "a"}, "transforms": {"operationName": ["title-case"]}}}"#,
        )
        .unwrap_err();

        assert_eq!(err.code(), ErrorCode::E201);
        assert_eq!(
            err.to_string(),
            "profile `p` uses unknown transform `title-case` for `operationName`"
        );
    }

    #[test]
    fn test_missing_package() {
        let profiles = parse_profiles(r#"{"p": {"mode": "protobuf"}}"#).unwrap();
        let profile = profiles.select(None).unwrap();
        assert_eq!(profile.options().package(), "");

        assert_eq!(
            validate_profile("p", profile).unwrap_err(),
            ProfileError::MissingPackage {
                profile: "p".to_string()
            }
        );
        assert!(validate_profile("p", &profile.clone().with_package("pets")).is_ok());
    }

    #[test]
    fn test_invalid_declared_package() {
        let err = parse_profiles(r#"{"p": {"options": {"package": "pet-store"}}}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Profile(ProfileError::InvalidPackage { .. })
        ));
    }

    #[test]
    fn test_package_validation() {
        assert!(is_valid_package("pets"));
        assert!(is_valid_package("petstore.v1"));
        assert!(is_valid_package("_internal.api_v2"));
        assert!(!is_valid_package("1pets"));
        assert!(!is_valid_package("pets..v1"));
        assert!(!is_valid_package(".pets"));
        assert!(!is_valid_package("pets.v1."));
        assert!(!is_valid_package("pet-store"));
        assert!(!is_valid_package("pet store"));
    }

    #[test]
    fn test_validate_profile() {
        assert!(validate_profile("p", &Profile::new("pets.v1")).is_ok());
        assert_eq!(
            validate_profile("p", &Profile::new("pets v1")).unwrap_err().code(),
            ErrorCode::E202
        );
    }
}
