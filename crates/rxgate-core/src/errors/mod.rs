//! Error handling for rxgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod license_error;

pub use config_error::ConfigError;
pub use error_code::GateErrorCode;
pub use license_error::LicenseError;
