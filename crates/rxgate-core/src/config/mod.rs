//! Configuration system for rxgate.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod demo_config;
pub mod gate_config;
pub mod license_config;
pub mod tool_config;

pub use demo_config::DemoConfig;
pub use gate_config::GateConfig;
pub use license_config::LicenseConfig;
pub use tool_config::ToolConfig;
