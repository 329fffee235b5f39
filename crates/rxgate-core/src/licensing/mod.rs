//! Licensing & feature gating — 2-tier system with structural key checks.
//!
//! ## Tiers
//! - **Demo**: literal `DEMO` key, capped scans/targets/threads, basic features only
//! - **Professional**: any `RXPRO-XXXXX-XXXXX-XXXXX-XXXXX` key, everything unlimited
//!
//! ## Components
//! - **tier** — the two license tiers
//! - **entitlement** — limits and flags unlocked by a tier
//! - **features** — gated features derived from an entitlement
//! - **key_format** — demo literal and professional key shape
//! - **request** — payload for the (stubbed) license server check
//! - **usage** — demo usage caps
//! - **gate** — LicenseGate: validate, check usage, activate from config

pub mod entitlement;
pub mod features;
pub mod gate;
pub mod key_format;
pub mod request;
pub mod tier;
pub mod usage;

pub use entitlement::{DemoLimits, Entitlement, UNLIMITED};
pub use features::GatedFeature;
pub use gate::{ActivatedLicense, LicenseGate, LicenseSource, ToolIdentity, ValidationResult};
pub use key_format::{is_demo_key, is_well_formed, DEMO_KEY, PRO_KEY_PREFIX};
pub use request::VerificationRequest;
pub use tier::LicenseTier;
pub use usage::{UsageDecision, UsageSnapshot};
