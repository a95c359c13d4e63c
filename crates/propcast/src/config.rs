//! Configuration file structure (propcast.toml).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use propcast_core::{ComponentOverrides, ConversionOptions};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub conversion: ConversionOptions,
    #[serde(default)]
    pub output: OutputSettings,
    /// Per-component overrides, keyed by exported component name
    #[serde(default)]
    pub components: HashMap<String, ComponentOverrides>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Directory for generated views; stdout when unset
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Serialization format for component views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
