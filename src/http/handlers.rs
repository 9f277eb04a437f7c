//! Route handlers.
//!
//! Every handler is a pure function of the resolved configuration and the
//! current wall-clock time; the only I/O is the certificate stat behind
//! `/ssl-status`. All JSON payloads carry an ISO-8601 UTC `timestamp`
//! computed at response time.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

use crate::http::response::{ApiError, ErrorEnvelope};
use crate::http::server::AppState;
use crate::security::{headers as https, tls};

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `GET /` — greeting naming the configured application.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "Hello from {}! Service is up and serving status endpoints.",
        state.config.app_name
    ))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

/// `GET /health` — 200 while enabled, 503 when health checks are toggled off.
pub async fn health(State(state): State<AppState>) -> Response {
    if !state.config.health_check_enabled {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "disabled",
                "message": "health checks are disabled by configuration",
                "timestamp": timestamp(),
            })),
        )
            .into_response();
    }

    Json(HealthResponse {
        status: "healthy",
        service: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
        environment: state.config.environment.as_str().to_string(),
        timestamp: timestamp(),
    })
    .into_response()
}

/// `GET /metrics` — static placeholders; real counters live in the access
/// log, not here.
pub async fn metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "uptime": "running",
        "requests_processed": "tracked_in_logs",
        "environment": state.config.environment.as_str(),
        "version": state.config.app_version,
        "timestamp": timestamp(),
    }))
}

/// `GET /config` — echo of the resolved configuration. The secret key is
/// skipped by the config's own serialization.
pub async fn config_echo(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut value = serde_json::to_value(state.config.as_ref())?;
    match value.as_object_mut() {
        Some(fields) => {
            fields.insert("timestamp".to_string(), json!(timestamp()));
        }
        None => {
            return Err(ApiError::Internal(
                "configuration did not serialize to an object".to_string(),
            ))
        }
    }
    Ok(Json(value))
}

/// `GET /security-headers` — introspection of the HTTPS enforcement toggles.
pub async fn security_headers(State(state): State<AppState>) -> Json<serde_json::Value> {
    let message = if state.config.force_https {
        "HTTPS enforcement headers are attached to every response"
    } else {
        "HTTPS enforcement headers are not attached"
    };

    Json(json!({
        "message": message,
        "environment": state.config.environment.as_str(),
        "https_enabled": state.config.https_enabled,
        "force_https": state.config.force_https,
        "timestamp": timestamp(),
    }))
}

/// `GET /ssl-status` — configured certificate paths and whether those files
/// exist right now.
pub async fn ssl_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = tls::inspect(&state.config.cert_path, &state.config.key_path);

    Json(json!({
        "https_enabled": state.config.https_enabled,
        "force_https": state.config.force_https,
        "certificate_path": status.certificate_path,
        "key_path": status.key_path,
        "certificate_exists": status.certificate_exists,
        "key_exists": status.key_exists,
        "timestamp": timestamp(),
    }))
}

/// `GET /force-https-test` — echoes the scheme the reverse proxy forwarded,
/// for verifying HTTPS termination end to end.
pub async fn force_https_test(headers: HeaderMap) -> Json<serde_json::Value> {
    let scheme = https::forwarded_proto(&headers);
    let secure = scheme == "https";
    let message = if secure {
        "request arrived over HTTPS"
    } else {
        "request arrived over plain HTTP"
    };

    Json(json!({
        "scheme": scheme,
        "secure": secure,
        "message": message,
        "timestamp": timestamp(),
    }))
}

/// Fallback for paths with no declared route.
pub async fn not_found(method: Method, uri: Uri) -> ErrorEnvelope {
    ErrorEnvelope::new(
        StatusCode::NOT_FOUND,
        format!("no route for {} {}", method, uri.path()),
    )
}

/// Fallback for declared paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ErrorEnvelope {
    ErrorEnvelope::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {} not allowed for {}", method, uri.path()),
    )
}
