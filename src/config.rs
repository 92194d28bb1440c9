use crate::domain::IncrementTarget;
use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "json-bump.toml";

/// Represents the complete configuration for json-bump.
///
/// Every section is optional; missing values fall back to defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

fn default_target() -> IncrementTarget {
    IncrementTarget::Patch
}

/// Where the manifest lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

/// Values used when the command line leaves them out.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_target")]
    pub target: IncrementTarget,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            target: default_target(),
        }
    }
}

/// Runtime behavior switches. Command-line flags can only turn these on.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub quiet: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `json-bump.toml` in current directory
/// 3. `json-bump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(BumpError::Config)` - If a file exists but cannot be read or parsed,
///   or an explicitly given path does not exist
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), e)))?;
    parse_config(&config_str).map_err(|e| match e {
        BumpError::Config(msg) => BumpError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| BumpError::config(e.to_string()))
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}
