//! LicenseGate — validate keys, check demo usage, activate from config.
//! Every call is a pure function of its arguments and the immutable state
//! fixed at construction.

use std::env::VarError;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GateConfig;
use crate::errors::{ConfigError, LicenseError};

use super::entitlement::{DemoLimits, Entitlement};
use super::key_format::{is_demo_key, is_well_formed, DEMO_KEY};
use super::request::VerificationRequest;
use super::usage::{UsageDecision, UsageSnapshot};

/// Version reported when the host tool does not supply one.
pub const DEFAULT_TOOL_VERSION: &str = "2.1.0";

/// Environment variable checked first by `LicenseGate::activate`.
pub const LICENSE_KEY_ENV_VAR: &str = "RXGATE_LICENSE_KEY";

/// Name and version of the tool being gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolIdentity {
    pub name: String,
    pub version: String,
}

impl ToolIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Outcome of `LicenseGate::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(Entitlement),
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn entitlement(&self) -> Option<&Entitlement> {
        match self {
            Self::Valid(ent) => Some(ent),
            Self::Invalid(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

impl From<Result<Entitlement, LicenseError>> for ValidationResult {
    fn from(result: Result<Entitlement, LicenseError>) -> Self {
        match result {
            Ok(ent) => Self::Valid(ent),
            Err(e) => Self::Invalid(e.to_string()),
        }
    }
}

/// Where the key used by `LicenseGate::activate` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSource {
    /// No key anywhere; fell back to the demo literal.
    Default,
    ConfigFile,
    EnvironmentVariable,
}

/// A validated license together with the source of its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedLicense {
    pub source: LicenseSource,
    pub result: ValidationResult,
}

/// Demo/professional license gate for one tool.
#[derive(Debug, Clone)]
pub struct LicenseGate {
    identity: ToolIdentity,
    demo_limits: DemoLimits,
}

impl LicenseGate {
    /// Gate with the standard demo caps.
    pub fn new(tool_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_demo_limits(ToolIdentity::new(tool_name, version), DemoLimits::standard())
    }

    /// Gate with explicit demo caps. Caps are not checked here; unbounded
    /// caps surface as an internal fault when a demo key is validated.
    pub fn with_demo_limits(identity: ToolIdentity, demo_limits: DemoLimits) -> Self {
        Self {
            identity,
            demo_limits,
        }
    }

    /// Gate built from a loaded config. Re-validates the config.
    pub fn from_config(config: &GateConfig) -> Result<Self, ConfigError> {
        GateConfig::validate(config)?;
        Ok(Self::with_demo_limits(
            config.tool.identity(),
            config.demo.effective_limits(),
        ))
    }

    pub fn identity(&self) -> &ToolIdentity {
        &self.identity
    }

    pub fn demo_limits(&self) -> &DemoLimits {
        &self.demo_limits
    }

    /// Validate a key. Always returns a result; never panics.
    pub fn validate(&self, license_key: &str) -> ValidationResult {
        let result = self.try_validate(license_key);
        if let Err(e) = &result {
            match e {
                LicenseError::MalformedKey => warn!(tool = %self.identity.name, "{}", e),
                LicenseError::InternalFault(_) => {
                    warn!(tool = %self.identity.name, error = %e, "License validation fault")
                }
            }
        }
        result.into()
    }

    /// Same decision as `validate`, with the typed error.
    pub fn try_validate(&self, license_key: &str) -> Result<Entitlement, LicenseError> {
        let entitlement = if is_demo_key(license_key) {
            Entitlement::demo(&self.demo_limits)
        } else {
            self.verify_remote(license_key);
            if !is_well_formed(license_key) {
                return Err(LicenseError::MalformedKey);
            }
            Entitlement::professional()
        };

        entitlement.check_invariants(&self.demo_limits)?;
        debug!(
            tool = %self.identity.name,
            tier = entitlement.tier.as_str(),
            "License validated"
        );
        Ok(entitlement)
    }

    /// Check session counters against an entitlement.
    pub fn check_usage(&self, entitlement: &Entitlement, usage: &UsageSnapshot) -> UsageDecision {
        let decision = UsageDecision::evaluate(entitlement, usage);
        if !decision.is_within_limits() {
            info!(
                tool = %self.identity.name,
                scan_count = usage.scan_count,
                target_count = usage.target_count,
                "{}",
                decision.message()
            );
        }
        decision
    }

    /// Resolve a key and validate it.
    /// Priority: `RXGATE_LICENSE_KEY` > `license.key` in config > demo.
    pub fn activate(&self, config: &GateConfig) -> ActivatedLicense {
        let env_key = match std::env::var(LICENSE_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => Some(key),
            Ok(_) | Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(
                    var = LICENSE_KEY_ENV_VAR,
                    "License key env var is not valid UTF-8, ignoring it"
                );
                None
            }
        };

        let (source, key) = match (env_key, config.license.key.as_deref()) {
            (Some(key), _) => (LicenseSource::EnvironmentVariable, key),
            (None, Some(key)) if !key.trim().is_empty() => {
                (LicenseSource::ConfigFile, key.to_string())
            }
            _ => (LicenseSource::Default, DEMO_KEY.to_string()),
        };

        let result = self.validate(key.trim());
        if let ValidationResult::Valid(ent) = &result {
            info!(
                tool = %self.identity.name,
                tier = ent.tier.as_str(),
                source = ?source,
                "License activated"
            );
        }
        ActivatedLicense { source, result }
    }

    /// Stand-in for the license server round-trip: logs the request only.
    fn verify_remote(&self, license_key: &str) {
        let request = VerificationRequest::new(&self.identity, license_key).redacted();
        match request.to_json() {
            Ok(body) => debug!(body = %body, "License server check skipped (local stub)"),
            Err(e) => debug!(error = %e, "License server request not serializable"),
        }
    }
}
