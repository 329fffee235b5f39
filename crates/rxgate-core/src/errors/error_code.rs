//! GateErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that collaborators can match on without parsing messages.
pub trait GateErrorCode {
    /// Returns the error code string (e.g., "LICENSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LICENSE_ERROR: &str = "LICENSE_ERROR";
