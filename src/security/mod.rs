//! HTTPS enforcement and certificate introspection.

pub mod headers;
pub mod tls;
