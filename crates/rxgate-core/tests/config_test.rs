//! Tests for the rxgate configuration system and config-driven activation.

use std::sync::Mutex;

use rxgate_core::config::GateConfig;
use rxgate_core::errors::{ConfigError, GateErrorCode};
use rxgate_core::licensing::{DemoLimits, LicenseGate, LicenseSource, LicenseTier};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all RXGATE_ env vars to prevent cross-test contamination.
fn clear_rxgate_env_vars() {
    for key in [
        "RXGATE_TOOL_NAME",
        "RXGATE_TOOL_VERSION",
        "RXGATE_DEMO_MAX_SCANS",
        "RXGATE_DEMO_MAX_TARGETS",
        "RXGATE_DEMO_MAX_THREADS",
        "RXGATE_LICENSE_KEY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let dir = tempdir();
    let config = GateConfig::load(dir.path()).unwrap();

    assert_eq!(config.tool.effective_name(), "Rootsploix");
    assert_eq!(config.tool.effective_version(), "2.1.0");
    assert_eq!(config.demo.effective_limits(), DemoLimits::standard());
    assert!(config.license.key.is_none());
}

#[test]
fn test_project_file_then_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("rxgate.toml"),
        r#"
[tool]
name = "PortScanner"

[demo]
max_scans = 5
max_targets = 2
reporting = true
"#,
    )
    .unwrap();

    std::env::set_var("RXGATE_DEMO_MAX_SCANS", "7");
    let config = GateConfig::load(dir.path()).unwrap();
    clear_rxgate_env_vars();

    let limits = config.demo.effective_limits();
    assert_eq!(config.tool.effective_name(), "PortScanner");
    assert_eq!(limits.max_scans, 7);
    assert_eq!(limits.max_targets, 2);
    assert!(limits.reporting);
    assert_eq!(limits.max_threads, 1);
}

#[test]
fn test_env_overrides_tool_identity_and_threads() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("rxgate.toml"),
        r#"
[tool]
name = "FileTool"
version = "1.0.0"

[demo]
max_threads = 1
"#,
    )
    .unwrap();

    std::env::set_var("RXGATE_TOOL_NAME", "EnvTool");
    std::env::set_var("RXGATE_TOOL_VERSION", "9.9");
    std::env::set_var("RXGATE_DEMO_MAX_THREADS", "3");
    let config = GateConfig::load(dir.path()).unwrap();
    clear_rxgate_env_vars();

    assert_eq!(config.tool.effective_name(), "EnvTool");
    assert_eq!(config.tool.effective_version(), "9.9");
    assert_eq!(config.demo.max_threads, Some(3));

    let gate = LicenseGate::from_config(&config).unwrap();
    assert_eq!(gate.identity().name, "EnvTool");
    assert_eq!(gate.identity().version, "9.9");
    assert_eq!(gate.try_validate("demo").unwrap().max_threads, 3);
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    std::env::set_var("RXGATE_DEMO_MAX_TARGETS", "lots");
    let config = GateConfig::load(tempdir().path()).unwrap();
    clear_rxgate_env_vars();

    assert_eq!(config.demo.max_targets, None);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("rxgate.toml"), "[demo\nmax_scans = ").unwrap();

    let err = GateConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_negative_demo_limit_fails_validation() {
    let config = GateConfig::from_toml(
        r#"
[demo]
max_targets = -1
"#,
    )
    .unwrap();

    let err = GateConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "demo.max_targets"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(LicenseGate::from_config(&config).is_err());
}

#[test]
fn test_empty_tool_name_fails_validation() {
    let config = GateConfig::from_toml("[tool]\nname = \"  \"\n").unwrap();
    assert!(GateConfig::validate(&config).is_err());
}

#[test]
fn test_from_config_carries_identity_and_limits() {
    let config = GateConfig::from_toml(
        r#"
[tool]
name = "WebFuzzer"
version = "3.0.0"

[demo]
max_scans = 2
"#,
    )
    .unwrap();

    let gate = LicenseGate::from_config(&config).unwrap();
    assert_eq!(gate.identity().name, "WebFuzzer");
    assert_eq!(gate.identity().version, "3.0.0");
    assert_eq!(gate.try_validate("demo").unwrap().max_scans, 2);
}

// ============================================================
// Activation: env > config file > default
// ============================================================

#[test]
fn test_activate_without_key_falls_back_to_demo() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config = GateConfig::default();
    let gate = LicenseGate::from_config(&config).unwrap();
    let activated = gate.activate(&config);

    assert_eq!(activated.source, LicenseSource::Default);
    assert_eq!(
        activated.result.entitlement().map(|e| e.tier),
        Some(LicenseTier::Demo)
    );
}

#[test]
fn test_activate_uses_config_key() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config =
        GateConfig::from_toml("[license]\nkey = \"RXPRO-ABC12-DEF34-GHI56-JKL78\"\n").unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();
    let activated = gate.activate(&config);

    assert_eq!(activated.source, LicenseSource::ConfigFile);
    assert_eq!(
        activated.result.entitlement().map(|e| e.tier),
        Some(LicenseTier::Professional)
    );
}

#[test]
fn test_activate_env_key_wins_over_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config =
        GateConfig::from_toml("[license]\nkey = \"RXPRO-ABC12-DEF34-GHI56-JKL78\"\n").unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();

    std::env::set_var("RXGATE_LICENSE_KEY", "demo\n");
    let activated = gate.activate(&config);
    clear_rxgate_env_vars();

    assert_eq!(activated.source, LicenseSource::EnvironmentVariable);
    assert_eq!(
        activated.result.entitlement().map(|e| e.tier),
        Some(LicenseTier::Demo)
    );
}

#[test]
fn test_activate_with_bad_key_reports_reason() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config = GateConfig::from_toml("[license]\nkey = \"RXPRO-nope\"\n").unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();
    let activated = gate.activate(&config);

    assert_eq!(activated.source, LicenseSource::ConfigFile);
    assert_eq!(activated.result.reason(), Some("Invalid license key format"));
}

#[test]
fn test_activate_blank_env_key_falls_through_to_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config =
        GateConfig::from_toml("[license]\nkey = \"RXPRO-ABC12-DEF34-GHI56-JKL78\"\n").unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();

    std::env::set_var("RXGATE_LICENSE_KEY", "   \t ");
    let activated = gate.activate(&config);
    clear_rxgate_env_vars();

    assert_eq!(activated.source, LicenseSource::ConfigFile);
    assert_eq!(
        activated.result.entitlement().map(|e| e.tier),
        Some(LicenseTier::Professional)
    );
}

#[test]
fn test_activate_trims_padded_config_key() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config =
        GateConfig::from_toml("[license]\nkey = \"  RXPRO-ABC12-DEF34-GHI56-JKL78  \"\n")
            .unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();
    let activated = gate.activate(&config);

    assert_eq!(activated.source, LicenseSource::ConfigFile);
    assert_eq!(
        activated.result.entitlement().map(|e| e.tier),
        Some(LicenseTier::Professional)
    );
}

#[cfg(unix)]
#[test]
fn test_activate_non_utf8_env_key_falls_through_to_config() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _lock = ENV_MUTEX.lock().unwrap();
    clear_rxgate_env_vars();

    let config =
        GateConfig::from_toml("[license]\nkey = \"RXPRO-ABC12-DEF34-GHI56-JKL78\"\n").unwrap();
    let gate = LicenseGate::from_config(&config).unwrap();

    std::env::set_var("RXGATE_LICENSE_KEY", OsStr::from_bytes(b"RXPRO-\xff\xfe"));
    let activated = gate.activate(&config);
    clear_rxgate_env_vars();

    assert_eq!(activated.source, LicenseSource::ConfigFile);
    assert!(activated.result.is_valid());
}
