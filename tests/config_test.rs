//! Tests for configuration loading
//!
//! Validates YAML parsing, defaults, environment variable expansion and
//! validation errors.

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use token_authorizer::config::{Config, ConfigError, ConfigLoader, LogFormat};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
logging:
  level: "debug"
  format: "json"
metrics:
  enabled: false
"#,
    );

    let config = Config::load(file.path()).expect("Failed to load config");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(!config.metrics.enabled);
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("metrics:\n  enabled: true\n");

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Config::load("/nonexistent/token-authorizer.yaml");
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_invalid_level_rejected() {
    let file = write_config("logging:\n  level: \"loud\"\n");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
#[serial]
fn test_env_expansion() {
    std::env::set_var("TOKEN_AUTHORIZER_TEST_LEVEL", "warn");

    let config = ConfigLoader::from_yaml("logging:\n  level: \"${TOKEN_AUTHORIZER_TEST_LEVEL}\"\n")
        .expect("Failed to parse config");
    assert_eq!(config.logging.level, "warn");

    std::env::remove_var("TOKEN_AUTHORIZER_TEST_LEVEL");
}

#[test]
#[serial]
fn test_env_expansion_default() {
    std::env::remove_var("TOKEN_AUTHORIZER_TEST_LEVEL");

    let config =
        ConfigLoader::from_yaml("logging:\n  level: \"${TOKEN_AUTHORIZER_TEST_LEVEL:-error}\"\n")
            .unwrap();
    assert_eq!(config.logging.level, "error");
}

#[test]
#[serial]
fn test_unresolved_placeholder_fails_validation() {
    std::env::remove_var("TOKEN_AUTHORIZER_TEST_LEVEL");

    let result = ConfigLoader::from_yaml("logging:\n  level: \"${TOKEN_AUTHORIZER_TEST_LEVEL}\"\n");
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}
