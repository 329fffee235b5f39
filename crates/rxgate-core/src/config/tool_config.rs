//! Identity of the gated tool.

use serde::{Deserialize, Serialize};

use crate::licensing::gate::{ToolIdentity, DEFAULT_TOOL_VERSION};

/// Default tool name when neither config nor env supplies one.
pub const DEFAULT_TOOL_NAME: &str = "Rootsploix";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolConfig {
    /// Tool name. Default: "Rootsploix".
    pub name: Option<String>,
    /// Tool version. Default: "2.1.0".
    pub version: Option<String>,
}

impl ToolConfig {
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_TOOL_NAME)
    }

    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_TOOL_VERSION)
    }

    pub fn identity(&self) -> ToolIdentity {
        ToolIdentity::new(self.effective_name(), self.effective_version())
    }
}
