//! Edge Pulse
//!
//! A small status/info HTTP service intended to sit behind a reverse proxy.
//! Exposes fixed informational endpoints (`/health`, `/metrics`, `/config`,
//! `/security-headers`, `/ssl-status`, `/force-https-test`), with structured
//! access logging, environment-driven configuration, and proxy-aware HTTPS
//! introspection.

pub mod config;
pub mod http;
pub mod observability;
pub mod security;

pub use config::{AppConfig, Profile};
pub use http::HttpServer;
