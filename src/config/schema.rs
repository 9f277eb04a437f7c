//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Named configuration profile.
///
/// Selected by `APP_ENV`. Unknown or absent names fall back to
/// [`Profile::Production`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Testing,
    #[default]
    Production,
}

impl Profile {
    /// Parse a profile name. Never fails: unknown names map to production.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" => Profile::Development,
            "testing" => Profile::Testing,
            _ => Profile::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Testing => "testing",
            Profile::Production => "production",
        }
    }

    /// Profile default for the debug flag.
    pub(crate) fn default_debug(&self) -> bool {
        matches!(self, Profile::Development)
    }

    /// Profile default for the log level.
    pub(crate) fn default_log_level(&self) -> &'static str {
        match self {
            Profile::Development | Profile::Testing => "debug",
            Profile::Production => "info",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved application configuration.
///
/// Read-only after startup; safe for unsynchronized concurrent reads.
/// Serialization is the `/config` echo, so the secret key is skipped.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Active profile name (`APP_ENV`).
    pub environment: Profile,

    /// Application name reported by the informational endpoints (`APP_NAME`).
    pub app_name: String,

    /// Application version reported by the informational endpoints
    /// (`APP_VERSION`).
    pub app_version: String,

    /// Debug mode (`APP_DEBUG`). Switches log output to human-readable form.
    pub debug: bool,

    /// Log level (`LOG_LEVEL`) used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Bind host (`HOST`).
    pub host: String,

    /// Bind port (`PORT`).
    pub port: u16,

    /// Whether `/health` reports healthy (`HEALTH_CHECK_ENABLED`).
    pub health_check_enabled: bool,

    /// Whether permissive CORS headers are attached (`CORS_ENABLED`).
    pub cors_enabled: bool,

    /// Whether TLS is expected to terminate in front of this service
    /// (`HTTPS_ENABLED`).
    pub https_enabled: bool,

    /// Whether HTTPS enforcement headers are attached to every response
    /// (`FORCE_HTTPS`).
    pub force_https: bool,

    /// Certificate path reported by `/ssl-status` (`SSL_CERT_PATH`).
    pub cert_path: String,

    /// Private key path reported by `/ssl-status` (`SSL_KEY_PATH`).
    pub key_path: String,

    /// Session secret (`SECRET_KEY`). Never serialized.
    #[serde(skip_serializing)]
    pub secret_key: String,
}

impl AppConfig {
    /// Address string suitable for binding, `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
