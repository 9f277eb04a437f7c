//! Configuration resolution from the environment.
//!
//! Resolution is a pure function over a captured snapshot of environment
//! variables, so tests never have to mutate process state. Layering order:
//! explicit environment variable, then profile default, then base default.

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::{AppConfig, Profile};

/// Captured environment variables at startup.
pub type EnvSnapshot = HashMap<String, String>;

/// Error type for configuration resolution. All variants are fatal at
/// startup; there is no recovery path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: expected 'true' or 'false'")]
    InvalidBool { var: &'static str, value: String },

    #[error("invalid value '{value}' for {var}: expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Resolve configuration from the process environment.
pub fn from_process_env() -> Result<AppConfig, ConfigError> {
    resolve(&std::env::vars().collect())
}

/// Resolve an immutable [`AppConfig`] from an environment snapshot.
pub fn resolve(env: &EnvSnapshot) -> Result<AppConfig, ConfigError> {
    let environment = env
        .get("APP_ENV")
        .map(|v| Profile::from_name(v))
        .unwrap_or_default();

    Ok(AppConfig {
        environment,
        app_name: string_var(env, "APP_NAME", "edge-pulse"),
        app_version: string_var(env, "APP_VERSION", "1.0.0"),
        debug: bool_var(env, "APP_DEBUG", environment.default_debug())?,
        log_level: string_var(env, "LOG_LEVEL", environment.default_log_level()),
        host: string_var(env, "HOST", "0.0.0.0"),
        port: port_var(env, "PORT", 8080)?,
        health_check_enabled: bool_var(env, "HEALTH_CHECK_ENABLED", true)?,
        cors_enabled: bool_var(env, "CORS_ENABLED", false)?,
        https_enabled: bool_var(env, "HTTPS_ENABLED", false)?,
        force_https: bool_var(env, "FORCE_HTTPS", false)?,
        cert_path: string_var(env, "SSL_CERT_PATH", "/etc/ssl/certs/server.crt"),
        key_path: string_var(env, "SSL_KEY_PATH", "/etc/ssl/private/server.key"),
        secret_key: string_var(env, "SECRET_KEY", "dev-secret-key-change-in-production"),
    })
}

fn string_var(env: &EnvSnapshot, var: &str, default: &str) -> String {
    env.get(var)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Parse a boolean flag. Accepts `true`/`false` case-insensitively;
/// anything else fails startup rather than silently defaulting.
fn bool_var(env: &EnvSnapshot, var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env.get(var).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                var,
                value: value.to_string(),
            }),
        },
    }
}

fn port_var(env: &EnvSnapshot, var: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env.get(var).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_yields_production_defaults() {
        let config = resolve(&EnvSnapshot::new()).unwrap();

        assert_eq!(config.environment, Profile::Production);
        assert_eq!(config.app_name, "edge-pulse");
        assert_eq!(config.app_version, "1.0.0");
        assert!(!config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.health_check_enabled);
        assert!(!config.cors_enabled);
        assert!(!config.https_enabled);
        assert!(!config.force_https);
    }

    #[test]
    fn development_profile_defaults() {
        let config = resolve(&snapshot(&[("APP_ENV", "development")])).unwrap();

        assert_eq!(config.environment, Profile::Development);
        assert!(config.debug);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn testing_profile_defaults() {
        let config = resolve(&snapshot(&[("APP_ENV", "testing")])).unwrap();

        assert_eq!(config.environment, Profile::Testing);
        assert!(!config.debug);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unknown_profile_falls_back_to_production() {
        let config = resolve(&snapshot(&[("APP_ENV", "staging")])).unwrap();

        assert_eq!(config.environment, Profile::Production);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn explicit_variables_beat_profile_defaults() {
        let config = resolve(&snapshot(&[
            ("APP_ENV", "development"),
            ("LOG_LEVEL", "warn"),
            ("APP_DEBUG", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert!(!config.debug);
    }

    #[test]
    fn booleans_parse_case_insensitively() {
        let config = resolve(&snapshot(&[
            ("HTTPS_ENABLED", "TRUE"),
            ("HEALTH_CHECK_ENABLED", "False"),
        ]))
        .unwrap();

        assert!(config.https_enabled);
        assert!(!config.health_check_enabled);
    }

    #[test]
    fn invalid_boolean_fails_fast() {
        let err = resolve(&snapshot(&[("HTTPS_ENABLED", "yes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { var, .. } if var == "HTTPS_ENABLED"));
    }

    #[test]
    fn invalid_port_fails_fast() {
        let err = resolve(&snapshot(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var, .. } if var == "PORT"));

        let err = resolve(&snapshot(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn secret_key_is_not_serialized() {
        let config = resolve(&snapshot(&[("SECRET_KEY", "hunter2")])).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert!(json.get("secret_key").is_none());
        assert!(!json.to_string().contains("hunter2"));
    }
}
