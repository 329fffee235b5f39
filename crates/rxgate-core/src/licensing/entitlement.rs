//! Entitlements — the limits and flags unlocked by a license tier.

use serde::{Deserialize, Serialize};

use crate::errors::LicenseError;

use super::features::GatedFeature;
use super::tier::LicenseTier;

/// Sentinel for an unbounded numeric limit.
pub const UNLIMITED: i64 = -1;

/// Caps applied to the demo tier.
///
/// Owned by the `LicenseGate` that was built with it; there is no
/// process-wide copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoLimits {
    pub max_scans: i64,
    pub max_targets: i64,
    pub advanced_features: bool,
    pub reporting: bool,
    pub max_threads: i64,
}

impl DemoLimits {
    pub const DEFAULT_MAX_SCANS: i64 = 10;
    pub const DEFAULT_MAX_TARGETS: i64 = 1;
    pub const DEFAULT_MAX_THREADS: i64 = 1;

    /// The stock demo caps: 10 scans, 1 target, 1 thread, no extras.
    pub const fn standard() -> Self {
        Self {
            max_scans: Self::DEFAULT_MAX_SCANS,
            max_targets: Self::DEFAULT_MAX_TARGETS,
            advanced_features: false,
            reporting: false,
            max_threads: Self::DEFAULT_MAX_THREADS,
        }
    }

    /// First numeric limit that is not bounded, as `(field, value)`.
    pub fn first_unbounded(&self) -> Option<(&'static str, i64)> {
        [
            ("max_scans", self.max_scans),
            ("max_targets", self.max_targets),
            ("max_threads", self.max_threads),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0)
    }
}

impl Default for DemoLimits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Entitlement produced by a successful validation.
///
/// Immutable once produced. Numeric limits use `UNLIMITED` (-1) for "no cap".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub tier: LicenseTier,
    pub max_scans: i64,
    pub max_targets: i64,
    pub advanced_features: bool,
    pub reporting: bool,
    pub max_threads: i64,
    /// Expiration (Unix timestamp). `None` = never expires.
    pub expires_at: Option<u64>,
}

impl Entitlement {
    /// Demo entitlement carrying the given caps.
    pub fn demo(limits: &DemoLimits) -> Self {
        Self {
            tier: LicenseTier::Demo,
            max_scans: limits.max_scans,
            max_targets: limits.max_targets,
            advanced_features: limits.advanced_features,
            reporting: limits.reporting,
            max_threads: limits.max_threads,
            expires_at: None,
        }
    }

    /// Professional entitlement: no caps, every flag on.
    pub fn professional() -> Self {
        Self {
            tier: LicenseTier::Professional,
            max_scans: UNLIMITED,
            max_targets: UNLIMITED,
            advanced_features: true,
            reporting: true,
            max_threads: UNLIMITED,
            expires_at: None,
        }
    }

    /// True if every numeric limit is `UNLIMITED`.
    pub fn is_unlimited(&self) -> bool {
        self.max_scans == UNLIMITED
            && self.max_targets == UNLIMITED
            && self.max_threads == UNLIMITED
    }

    /// True if the entitlement has an expiry at or before `now` (Unix seconds).
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Check if this entitlement grants `feature`.
    pub fn allows(&self, feature: GatedFeature) -> bool {
        match feature {
            GatedFeature::AdvancedFeatures => self.advanced_features,
            GatedFeature::Reporting => self.reporting,
            GatedFeature::MultiThreading => self.max_threads == UNLIMITED || self.max_threads > 1,
        }
    }

    /// All features this entitlement grants.
    pub fn features(&self) -> Vec<GatedFeature> {
        GatedFeature::ALL
            .iter()
            .copied()
            .filter(|f| self.allows(*f))
            .collect()
    }

    /// Verify the tier invariants against the caps the demo tier should carry.
    pub fn check_invariants(&self, demo: &DemoLimits) -> Result<(), LicenseError> {
        match self.tier {
            LicenseTier::Demo => {
                if let Some((field, value)) = demo.first_unbounded() {
                    return Err(LicenseError::InternalFault(format!(
                        "demo limit {field} must be bounded, got {value}"
                    )));
                }
                if *self != Self::demo(demo) {
                    return Err(LicenseError::InternalFault(
                        "demo entitlement does not match demo limits".to_string(),
                    ));
                }
            }
            LicenseTier::Professional => {
                if *self != Self::professional() {
                    return Err(LicenseError::InternalFault(
                        "professional entitlement must be unlimited with all features".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
