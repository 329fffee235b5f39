//! Payload for the license server check.
//!
//! The server round-trip is stubbed: the request is built and logged so the
//! shape stays stable, but nothing is sent.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use super::gate::ToolIdentity;
use super::key_format::PRO_KEY_HEAD;

/// What would be posted to the license server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    pub tool: String,
    pub license: String,
    pub version: String,
    /// Unix seconds at request time.
    pub timestamp: u64,
}

impl VerificationRequest {
    pub fn new(identity: &ToolIdentity, license_key: &str) -> Self {
        Self {
            tool: identity.name.clone(),
            license: license_key.to_string(),
            version: identity.version.clone(),
            timestamp: current_unix_time(),
        }
    }

    /// Copy safe to log: the key keeps only its first field.
    pub fn redacted(&self) -> Self {
        Self {
            license: redact_key(&self.license),
            ..self.clone()
        }
    }

    /// JSON body of the request.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Mask a key for logging. Only a literal `RXPRO` head survives, with dashes
/// kept in place; anything else is fully masked.
pub fn redact_key(key: &str) -> String {
    match key.split_once('-') {
        Some((head, rest)) if head == PRO_KEY_HEAD => {
            let masked: String = rest
                .chars()
                .map(|c| if c == '-' { '-' } else { '*' })
                .collect();
            format!("{head}-{masked}")
        }
        _ => "*".repeat(key.chars().count()),
    }
}

fn current_unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
