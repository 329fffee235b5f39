//! Demo usage caps.

use serde::{Deserialize, Serialize};

use super::entitlement::{Entitlement, UNLIMITED};

/// Caller-owned session counters. Not stored by the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    #[serde(default)]
    pub scan_count: i64,
    #[serde(default)]
    pub target_count: i64,
}

impl UsageSnapshot {
    pub fn new(scan_count: i64, target_count: i64) -> Self {
        Self {
            scan_count,
            target_count,
        }
    }
}

/// Result of a usage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageDecision {
    WithinLimits,
    ScanLimitReached { max_scans: i64 },
    TargetLimitExceeded { max_targets: i64 },
}

impl UsageDecision {
    /// Evaluate `usage` against `entitlement`.
    ///
    /// Scans are checked before targets and the first failure wins.
    /// The scan cap is reached at `scan_count >= max_scans`; the target cap
    /// is only exceeded at `target_count > max_targets`.
    pub fn evaluate(entitlement: &Entitlement, usage: &UsageSnapshot) -> Self {
        if entitlement.max_scans != UNLIMITED && usage.scan_count >= entitlement.max_scans {
            return Self::ScanLimitReached {
                max_scans: entitlement.max_scans,
            };
        }
        if entitlement.max_targets != UNLIMITED && usage.target_count > entitlement.max_targets {
            return Self::TargetLimitExceeded {
                max_targets: entitlement.max_targets,
            };
        }
        Self::WithinLimits
    }

    pub fn is_within_limits(&self) -> bool {
        matches!(self, Self::WithinLimits)
    }

    pub fn message(&self) -> String {
        match self {
            Self::WithinLimits => "Within demo limits".to_string(),
            Self::ScanLimitReached { max_scans } => {
                format!("Demo limit reached: {max_scans} scans maximum")
            }
            Self::TargetLimitExceeded { max_targets } => {
                format!("Demo limit: {max_targets} target maximum")
            }
        }
    }

    /// `(within_limits, message)` pair.
    pub fn into_parts(self) -> (bool, String) {
        (self.is_within_limits(), self.message())
    }
}
