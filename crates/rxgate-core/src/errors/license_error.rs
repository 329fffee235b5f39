//! License validation errors.
//!
//! These never cross `LicenseGate::validate`; they are folded into
//! `ValidationResult::Invalid` using their `Display` text as the reason.

use super::error_code::{self, GateErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LicenseError {
    /// Key is neither the demo literal nor a well-formed professional key.
    #[error("Invalid license key format")]
    MalformedKey,

    /// Validation produced something it should not have.
    #[error("License validation failed: {0}")]
    InternalFault(String),
}

impl GateErrorCode for LicenseError {
    fn error_code(&self) -> &'static str {
        error_code::LICENSE_ERROR
    }
}
