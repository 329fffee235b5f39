//! License tiers.

use serde::{Deserialize, Serialize};

/// License tier for feature gating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    #[default]
    Demo,
    Professional,
}

impl LicenseTier {
    /// Tier name as string (for logging and serialized records).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Professional => "professional",
        }
    }

    /// Parse tier from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "demo" => Some(Self::Demo),
            "professional" => Some(Self::Professional),
            _ => None,
        }
    }
}

impl std::fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
