//! numconv configuration
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller after loading)
//! 2. Environment variables (`NUMCONV_` prefix)
//! 3. Explicit `--config` file
//! 4. `numconv.yaml`, then `numconv.toml` in the working directory
//! 5. Default values

use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use numcodec::Endianness;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "NUMCONV_";

/// Which text renderings to print for encoded bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Uppercase hex, e.g. 0AFF
    #[default]
    Hex,
    /// Space-separated 8-bit groups, e.g. 00001010 11111111
    Bits,
    /// Both, one per line
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumconvConfig {
    /// Byte order used when `--endian` is not given
    #[serde(default)]
    pub endian: Endianness,

    /// Rendering used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NumconvConfig {
    fn default() -> Self {
        Self {
            endian: Endianness::default(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Config file must have an extension: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load configuration: {0}")]
    Extract(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}

/// Load configuration from the working directory, `explicit` and the environment
pub fn load(explicit: Option<&Path>) -> Result<NumconvConfig, ConfigError> {
    load_layered(Path::new("."), explicit, ENV_PREFIX)
}

fn load_layered(
    dir: &Path,
    explicit: Option<&Path>,
    env_prefix: &str,
) -> Result<NumconvConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(NumconvConfig::default()))
        .merge(Toml::file(dir.join("numconv.toml")))
        .merge(Yaml::file(dir.join("numconv.yaml")));

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::MissingExtension(path.to_path_buf()))?;

        figment = match extension {
            "toml" => figment.merge(Toml::file(path)),
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            "json" => figment.merge(Json::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(extension.to_string())),
        };
    }

    Ok(figment.merge(Env::prefixed(env_prefix)).extract()?)
}
