//! Demo tier caps.

use serde::{Deserialize, Serialize};

use crate::licensing::entitlement::DemoLimits;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Scans per session. Default: 10.
    pub max_scans: Option<i64>,
    /// Targets per session. Default: 1.
    pub max_targets: Option<i64>,
    /// Default: false.
    pub advanced_features: Option<bool>,
    /// Default: false.
    pub reporting: Option<bool>,
    /// Worker threads. Default: 1.
    pub max_threads: Option<i64>,
}

impl DemoConfig {
    /// Caps with compiled defaults filled in.
    pub fn effective_limits(&self) -> DemoLimits {
        let defaults = DemoLimits::standard();
        DemoLimits {
            max_scans: self.max_scans.unwrap_or(defaults.max_scans),
            max_targets: self.max_targets.unwrap_or(defaults.max_targets),
            advanced_features: self.advanced_features.unwrap_or(defaults.advanced_features),
            reporting: self.reporting.unwrap_or(defaults.reporting),
            max_threads: self.max_threads.unwrap_or(defaults.max_threads),
        }
    }
}
