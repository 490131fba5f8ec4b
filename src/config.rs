//! Configuration file support for mkpcli.
//!
//! Provides YAML-based configuration through `mkpcli.config.yml` files and
//! the merge of file values with command-line flags and environment
//! variables.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use mkpcli::application::dto::OutputFormat;
use mkpcli::marketplace::services::DEFAULT_MAX_PAGES;
use mkpcli::shared::error::MarketplaceError;
use mkpcli::shared::Result;

use crate::cli::GlobalArgs;

const CONFIG_FILENAME: &str = "mkpcli.config.yml";

pub const DEFAULT_MARKETPLACE_HOST: &str = "gtw.marketplace.cloud.vmware.com";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub marketplace_host: Option<String>,
    pub api_token: Option<String>,
    pub storage_bucket: Option<String>,
    pub storage_endpoint: Option<String>,
    pub output_format: Option<String>,
    pub max_pages: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\nHint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\nHint: Ensure the file contains valid YAML syntax.",
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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_pages == Some(0) {
        bail!("Invalid config: max_pages must be at least 1.");
    }

    if let Some(ref format) = config.output_format {
        if let Err(message) = OutputFormat::from_str(format) {
            bail!("Invalid config: output_format: {}", message);
        }
    }

    for (name, value) in [
        ("marketplace_host", &config.marketplace_host),
        ("storage_endpoint", &config.storage_endpoint),
    ] {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", name);
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings after merging flags, environment, and config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub marketplace_host: String,
    pub api_token: Option<String>,
    pub storage_bucket: Option<String>,
    pub storage_endpoint: Option<String>,
    pub output_format: OutputFormat,
    pub max_pages: u32,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Settings {
    /// Flag or environment value first, then the config file, then the default
    pub fn resolve(args: &GlobalArgs, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let output_format = match (args.output_format, config.output_format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format)
                .map_err(|message| MarketplaceError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            marketplace_host: args
                .marketplace_host
                .clone()
                .or(config.marketplace_host)
                .unwrap_or_else(|| DEFAULT_MARKETPLACE_HOST.to_string()),
            api_token: non_empty(args.api_token.clone()).or(non_empty(config.api_token)),
            storage_bucket: args.storage_bucket.clone().or(config.storage_bucket),
            storage_endpoint: args.storage_endpoint.clone().or(config.storage_endpoint),
            output_format,
            max_pages: config.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
            output: args.output.clone(),
            quiet: args.quiet,
        })
    }

    /// The API token, or an error explaining how to provide one
    pub fn require_api_token(&self) -> Result<&str> {
        self.api_token.as_deref().ok_or_else(|| {
            MarketplaceError::Validation {
                message: "an API token is required: pass --api-token, set MKPCLI_API_TOKEN, or add api_token to the config file".to_string(),
            }
            .into()
        })
    }

    pub fn require_storage(&self) -> Result<(&str, &str)> {
        match (
            self.storage_bucket.as_deref(),
            self.storage_endpoint.as_deref(),
        ) {
            (Some(bucket), Some(endpoint)) => Ok((bucket, endpoint)),
            _ => Err(MarketplaceError::Validation {
                message: "uploading requires a storage bucket and endpoint: pass --storage-bucket and --storage-endpoint, or add them to the config file".to_string(),
            }
            .into()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
