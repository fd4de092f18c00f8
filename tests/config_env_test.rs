// Integration tests for configuration from the process environment

use std::env;
use std::path::PathBuf;

use coinpage::adapters::DEFAULT_ENDPOINT;
use coinpage::cli::parse_args;
use coinpage::config::{
    AppConfig, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_GROUP_SEPARATOR, ENV_LOG_FILE,
    ENV_TIMEOUT_SECS,
};
use coinpage::format::NumberFormat;
use serial_test::serial;

const ALL_VARS: [&str; 4] = [ENV_API_URL, ENV_TIMEOUT_SECS, ENV_GROUP_SEPARATOR, ENV_LOG_FILE];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = AppConfig::from_env();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.number_format, NumberFormat::default());
    assert!(config.log_file.is_none());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var(ENV_API_URL, "http://localhost:9000/api/tickers/");
    env::set_var(ENV_TIMEOUT_SECS, "7");
    env::set_var(ENV_GROUP_SEPARATOR, ".");
    env::set_var(ENV_LOG_FILE, "/tmp/coinpage-test.log");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.endpoint, "http://localhost:9000/api/tickers/");
    assert_eq!(config.timeout_secs, 7);
    assert_eq!(config.number_format, NumberFormat::new('.', ','));
    assert_eq!(config.log_file_path(), PathBuf::from("/tmp/coinpage-test.log"));
}

#[test]
#[serial]
fn test_from_env_ignores_invalid_values() {
    clear_env();
    env::set_var(ENV_TIMEOUT_SECS, "soon");
    env::set_var(ENV_GROUP_SEPARATOR, "::");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.number_format, NumberFormat::default());
}

#[test]
#[serial]
fn test_flags_override_environment() {
    clear_env();
    env::set_var(ENV_API_URL, "http://from-env/");
    env::set_var(ENV_TIMEOUT_SECS, "7");

    let args = parse_args(
        ["coinpage", "--url", "http://from-flag/", "--timeout", "3"]
            .iter()
            .map(|s| s.to_string()),
    );
    let config = args.apply_to(AppConfig::from_env());
    clear_env();

    assert_eq!(config.endpoint, "http://from-flag/");
    assert_eq!(config.timeout_secs, 3);
}
