//! Logging and per-request access records.

pub mod access_log;
pub mod logging;
