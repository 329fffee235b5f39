//! # rxgate-core
//!
//! License tier gate for Rootsploix tools.
//! Classifies a presented key as demo or professional, attaches the
//! entitlement for that tier, and enforces the demo tier's per-session caps.
//!
//! Passing validation is a structural check only. It is not proof of purchase.

pub mod config;
pub mod errors;
pub mod licensing;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::GateConfig;
pub use errors::error_code::GateErrorCode;
pub use licensing::{
    Entitlement, LicenseGate, LicenseTier, ToolIdentity, UsageDecision, UsageSnapshot,
    ValidationResult,
};
