//! Generation profile types.
//!
//! A [`Profile`] is the resolved configuration a definition is rendered
//! with. The renderer itself only reads the package name; the naming
//! [`Transforms`] are applied to the definition before it reaches the
//! renderer.
//!
//! # Example
//!
//! ```
//! # use protogen_core::profile::{Profile, Transform};
//! let profile = Profile::new("petstore.v1");
//!
//! assert_eq!(profile.options().package(), "petstore.v1");
//! assert_eq!(profile.transforms().model_name(), &[Transform::PascalCase]);
//! assert_eq!(Transform::CamelCase.apply("get_pet_by_id"), "getPetById");
//! ```

use std::{fmt, str::FromStr};

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Output mode a profile targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Protocol Buffers `.proto` file.
    #[default]
    Protobuf,
}

impl Mode {
    /// Returns the mode name used in profile files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protobuf => "protobuf",
        }
    }

    /// Returns the naming transforms this mode applies when a profile does
    /// not override them.
    pub fn default_transforms(&self) -> Transforms {
        match self {
            Self::Protobuf => Transforms {
                service_name: vec![Transform::PascalCase],
                operation_name: vec![Transform::CamelCase],
                parameter_name: vec![Transform::CamelCase],
                model_name: vec![Transform::PascalCase],
                property_name: vec![Transform::CamelCase],
            },
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protobuf" => Ok(Self::Protobuf),
            _ => Err(format!("unsupported mode `{s}`")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A naming-case function applied to identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `PetStore`
    PascalCase,
    /// `petStore`
    CamelCase,
    /// `pet_store`
    SnakeCase,
    /// `pet-store`
    KebabCase,
    /// `PETSTORE`
    UpperCase,
    /// `petstore`
    LowerCase,
}

impl Transform {
    /// Returns the transform name used in profile files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PascalCase => "pascal-case",
            Self::CamelCase => "camel-case",
            Self::SnakeCase => "snake-case",
            Self::KebabCase => "kebab-case",
            Self::UpperCase => "upper-case",
            Self::LowerCase => "lower-case",
        }
    }

    /// Applies this transform to `name`.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::PascalCase => name.to_upper_camel_case(),
            Self::CamelCase => name.to_lower_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
            Self::UpperCase => name.to_uppercase(),
            Self::LowerCase => name.to_lowercase(),
        }
    }

    /// Applies a chain of transforms left to right.
    pub fn apply_all(transforms: &[Transform], name: &str) -> String {
        transforms
            .iter()
            .fold(name.to_string(), |acc, transform| transform.apply(&acc))
    }
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pascal-case" => Ok(Self::PascalCase),
            "camel-case" => Ok(Self::CamelCase),
            "snake-case" => Ok(Self::SnakeCase),
            "kebab-case" => Ok(Self::KebabCase),
            "upper-case" => Ok(Self::UpperCase),
            "lower-case" => Ok(Self::LowerCase),
            _ => Err(format!("unknown transform `{s}`")),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Naming transforms per identifier class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transforms {
    service_name: Vec<Transform>,
    operation_name: Vec<Transform>,
    parameter_name: Vec<Transform>,
    model_name: Vec<Transform>,
    property_name: Vec<Transform>,
}

impl Transforms {
    /// Transforms that leave every identifier untouched.
    pub fn none() -> Self {
        Self::default()
    }

    /// Transforms applied to service names.
    pub fn service_name(&self) -> &[Transform] {
        &self.service_name
    }

    /// Transforms applied to operation names.
    pub fn operation_name(&self) -> &[Transform] {
        &self.operation_name
    }

    /// Transforms applied to parameter names.
    pub fn parameter_name(&self) -> &[Transform] {
        &self.parameter_name
    }

    /// Transforms applied to model names and model references.
    pub fn model_name(&self) -> &[Transform] {
        &self.model_name
    }

    /// Transforms applied to property names.
    pub fn property_name(&self) -> &[Transform] {
        &self.property_name
    }

    /// Sets the service name transforms.
    pub fn with_service_name(mut self, transforms: Vec<Transform>) -> Self {
        self.service_name = transforms;
        self
    }

    /// Sets the operation name transforms.
    pub fn with_operation_name(mut self, transforms: Vec<Transform>) -> Self {
        self.operation_name = transforms;
        self
    }

    /// Sets the parameter name transforms.
    pub fn with_parameter_name(mut self, transforms: Vec<Transform>) -> Self {
        self.parameter_name = transforms;
        self
    }

    /// Sets the model name transforms.
    pub fn with_model_name(mut self, transforms: Vec<Transform>) -> Self {
        self.model_name = transforms;
        self
    }

    /// Sets the property name transforms.
    pub fn with_property_name(mut self, transforms: Vec<Transform>) -> Self {
        self.property_name = transforms;
        self
    }
}

/// Mode-specific options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    package: String,
}

impl ProfileOptions {
    /// Creates options for the given proto package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Returns the proto package name.
    pub fn package(&self) -> &str {
        &self.package
    }
}

/// Resolved generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    mode: Mode,
    options: ProfileOptions,
    transforms: Transforms,
}

impl Profile {
    /// Creates a protobuf profile with the default transforms.
    ///
    /// # Arguments
    ///
    /// * `package` - The proto package name emitted in the header.
    pub fn new(package: impl Into<String>) -> Self {
        let mode = Mode::default();
        Self {
            mode,
            options: ProfileOptions::new(package),
            transforms: mode.default_transforms(),
        }
    }

    /// Creates a profile from fully resolved parts.
    pub fn from_parts(mode: Mode, options: ProfileOptions, transforms: Transforms) -> Self {
        Self {
            mode,
            options,
            transforms,
        }
    }

    /// Returns a copy targeting a different proto package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.options = ProfileOptions::new(package);
        self
    }

    /// Returns a copy with different transforms.
    pub fn with_transforms(mut self, transforms: Transforms) -> Self {
        self.transforms = transforms;
        self
    }

    /// Returns the output mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the mode options.
    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Returns the naming transforms.
    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }
}
