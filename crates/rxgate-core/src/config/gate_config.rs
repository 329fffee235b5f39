//! Top-level rxgate configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DemoConfig, LicenseConfig, ToolConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "rxgate.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RXGATE_*`)
/// 2. Project config (`rxgate.toml` in project root)
/// 3. Compiled defaults
///
/// `RXGATE_LICENSE_KEY` is not folded in here; `LicenseGate::activate`
/// reads it directly so it can report where the key came from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    pub tool: ToolConfig,
    pub demo: DemoConfig,
    pub license: LicenseConfig,
}

impl GateConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GateConfig) -> Result<(), ConfigError> {
        if config.tool.effective_name().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "tool.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some((field, _)) = config.demo.effective_limits().first_unbounded() {
            return Err(ConfigError::ValidationFailed {
                field: format!("demo.{field}"),
                message: "must be 0 or greater".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GateConfig, other: &GateConfig) {
        // Tool
        if other.tool.name.is_some() {
            base.tool.name = other.tool.name.clone();
        }
        if other.tool.version.is_some() {
            base.tool.version = other.tool.version.clone();
        }

        // Demo
        if other.demo.max_scans.is_some() {
            base.demo.max_scans = other.demo.max_scans;
        }
        if other.demo.max_targets.is_some() {
            base.demo.max_targets = other.demo.max_targets;
        }
        if other.demo.advanced_features.is_some() {
            base.demo.advanced_features = other.demo.advanced_features;
        }
        if other.demo.reporting.is_some() {
            base.demo.reporting = other.demo.reporting;
        }
        if other.demo.max_threads.is_some() {
            base.demo.max_threads = other.demo.max_threads;
        }

        // License
        if other.license.key.is_some() {
            base.license.key = other.license.key.clone();
        }
    }

    /// Apply `RXGATE_*` environment overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut GateConfig) {
        if let Ok(val) = std::env::var("RXGATE_TOOL_NAME") {
            config.tool.name = Some(val);
        }
        if let Ok(val) = std::env::var("RXGATE_TOOL_VERSION") {
            config.tool.version = Some(val);
        }
        if let Ok(val) = std::env::var("RXGATE_DEMO_MAX_SCANS") {
            if let Ok(v) = val.parse::<i64>() {
                config.demo.max_scans = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RXGATE_DEMO_MAX_TARGETS") {
            if let Ok(v) = val.parse::<i64>() {
                config.demo.max_targets = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RXGATE_DEMO_MAX_THREADS") {
            if let Ok(v) = val.parse::<i64>() {
                config.demo.max_threads = Some(v);
            }
        }
    }
}
