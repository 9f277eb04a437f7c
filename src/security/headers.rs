//! Proxy-aware HTTPS headers.
//!
//! TLS terminates at the reverse proxy in front of this service, so the
//! inbound scheme is carried by `X-Forwarded-Proto`. Never trust more than
//! the first value; proxies append to the list left-to-right.

use axum::http::{header, HeaderMap, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// HSTS policy attached to every response when forced HTTPS is on.
pub const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

/// Layer adding `Strict-Transport-Security` unless a handler already set it.
pub fn hsts_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static(HSTS_VALUE),
    )
}

/// Effective request scheme as reported by the reverse proxy.
///
/// Takes the first entry of `X-Forwarded-Proto`, lowercased. Falls back to
/// `http` when the header is absent or unreadable.
pub fn forwarded_proto(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "http".to_string())
}
