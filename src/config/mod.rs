//! Environment-driven configuration.
//!
//! Configuration is resolved exactly once at startup from an environment
//! snapshot and is immutable afterwards. A named profile (development,
//! testing, production) supplies defaults; explicit environment variables
//! always win over profile defaults.

pub mod loader;
pub mod schema;

pub use loader::{from_process_env, resolve, ConfigError, EnvSnapshot};
pub use schema::{AppConfig, Profile};
