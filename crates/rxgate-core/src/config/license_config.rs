//! License key configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LicenseConfig {
    /// License key. `RXGATE_LICENSE_KEY` takes precedence at activation.
    pub key: Option<String>,
}
