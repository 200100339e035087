//! Configuration discovery for the CLI.
//!
//! An explicit `--config` path must exist. Otherwise the first existing file
//! among `protogen/config.toml` and the platform configuration directory is
//! used, and the defaults apply when there is none.

use std::{
    fs, iter,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use protogen::{ProtogenError, config::AppConfig};

const LOCAL_CONFIG: &str = "protogen/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{}` does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("invalid config file `{}`: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl From<ConfigError> for ProtogenError {
    fn from(err: ConfigError) -> Self {
        ProtogenError::Config(err.to_string())
    }
}

/// Load the emission settings for this run.
///
/// # Errors
///
/// Returns `ProtogenError::Config` when `explicit_path` does not exist or a
/// config file is not valid TOML for [`AppConfig`], and `ProtogenError::Io`
/// when it cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ProtogenError> {
    let path = match explicit_path {
        Some(path) => {
            let path = path.as_ref().to_path_buf();
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            path
        }
        None => match discover() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(&path)?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Invalid { path, source })?;
    Ok(config)
}

fn discover() -> Option<PathBuf> {
    let system = ProjectDirs::from("com", "protogen", "protogen")
        .map(|dirs| dirs.config_dir().join("config.toml"));

    iter::once(PathBuf::from(LOCAL_CONFIG))
        .chain(system)
        .inspect(|path| debug!(path = path.display().to_string(); "Looking for configuration"))
        .find(|path| path.is_file())
}
