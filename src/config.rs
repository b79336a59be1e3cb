//! Configuration file support for dtgraph.
//!
//! Provides YAML-based configuration through `dtgraph.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use dtgraph::adapters::outbound::devicetree::DEFAULT_DTC;
use dtgraph::application::dto::OutputFormat;
use dtgraph::graph_projection::domain::LayoutName;
use dtgraph::shared::Result;

pub const CONFIG_FILENAME: &str = "dtgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub layout: Option<String>,
    pub style: Option<String>,
    pub dtc: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options given on the command line that a config file may fill in.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub layout: Option<LayoutName>,
    pub style: Option<String>,
    pub dtc: Option<String>,
}

/// Effective settings after applying CLI > config file > defaults.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub layout: Option<LayoutName>,
    pub style: Option<String>,
    pub dtc: String,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merge command-line options with an optional config file.
pub fn resolve_settings(cli: CliOverrides, config: Option<&ConfigFile>) -> Result<Settings> {
    let config_format = match config.and_then(|c| c.format.as_deref()) {
        Some(format) => Some(parse_format(format)?),
        None => None,
    };
    let config_layout = match config.and_then(|c| c.layout.as_deref()) {
        Some(layout) => Some(layout.parse::<LayoutName>()?),
        None => None,
    };

    Ok(Settings {
        format: cli
            .format
            .or(config_format)
            .unwrap_or(OutputFormat::Json),
        layout: cli.layout.or(config_layout),
        style: cli.style.or_else(|| config.and_then(|c| c.style.clone())),
        dtc: cli
            .dtc
            .or_else(|| config.and_then(|c| c.dtc.clone()))
            .unwrap_or_else(|| DEFAULT_DTC.to_string()),
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        parse_format(format)?;
    }
    if let Some(ref layout) = config.layout {
        layout
            .parse::<LayoutName>()
            .context("Invalid config: layout")?;
    }
    if let Some(ref style) = config.style {
        if style.trim().is_empty() {
            bail!(
                "Invalid config: style must not be empty.\n\n\
                 💡 Hint: Remove the 'style' field to use the bundled stylesheet."
            );
        }
    }
    if let Some(ref dtc) = config.dtc {
        if dtc.trim().is_empty() {
            bail!(
                "Invalid config: dtc must not be empty.\n\n\
                 💡 Hint: Set 'dtc' to the device tree compiler path (e.g., \"/usr/bin/dtc\") or remove it."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
