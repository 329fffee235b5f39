//! Gated features unlocked by an entitlement.
//!
//! Demo: none of these. Professional: all of them.

use serde::{Deserialize, Serialize};

/// Features that sit behind the professional tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatedFeature {
    AdvancedFeatures,
    Reporting,
    MultiThreading,
}

impl GatedFeature {
    pub const ALL: [GatedFeature; 3] = [
        Self::AdvancedFeatures,
        Self::Reporting,
        Self::MultiThreading,
    ];

    /// Feature name as string (for config and logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdvancedFeatures => "advanced_features",
            Self::Reporting => "reporting",
            Self::MultiThreading => "multi_threading",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "advanced_features" => Some(Self::AdvancedFeatures),
            "reporting" => Some(Self::Reporting),
            "multi_threading" => Some(Self::MultiThreading),
            _ => None,
        }
    }

    /// Human-readable description for upgrade messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AdvancedFeatures => "Advanced techniques",
            Self::Reporting => "Professional reporting",
            Self::MultiThreading => "Multi-threading support",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_roundtrip() {
        for feature in &GatedFeature::ALL {
            assert_eq!(GatedFeature::parse(feature.as_str()), Some(*feature));
        }
        assert_eq!(GatedFeature::parse("unknown"), None);
    }

    #[test]
    fn descriptions_nonempty() {
        for feature in &GatedFeature::ALL {
            assert!(!feature.description().is_empty());
        }
    }
}
