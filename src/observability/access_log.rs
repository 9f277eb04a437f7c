//! Per-request access logging middleware.
//!
//! Emits exactly one entry record before dispatch and one exit record after
//! the handler completes, tied together by a generated request ID. The exit
//! record fires for routed errors too; panics are converted to responses by
//! the catch-panic layer beneath this one, so they also pass through here.
//! Log emission never fails the request.
//!
//! Record fields are always present; inapplicable fields carry empty values
//! rather than being attached conditionally.

use std::net::SocketAddr;

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Fields captured when a request enters the service.
#[derive(Debug)]
pub struct RequestRecord {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub remote_addr: String,
    pub user_agent: String,
}

/// Fields captured when the response leaves the service.
#[derive(Debug)]
pub struct ResponseRecord {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body_bytes: u64,
}

impl RequestRecord {
    fn capture(request: &Request) -> Self {
        // ConnectInfo is only present when the router was served with
        // connect info; oneshot-driven tests run without it.
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_default();

        Self {
            request_id: Uuid::new_v4().to_string(),
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            remote_addr,
            user_agent: request
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Middleware recording entry and exit for every request.
///
/// Also stamps the generated request ID onto the forwarded request and the
/// outgoing response as `x-request-id`.
pub async fn record(mut request: Request, next: Next) -> Response {
    let entry = RequestRecord::capture(&request);

    tracing::info!(
        target: "access",
        request_id = %entry.request_id,
        method = %entry.method,
        path = %entry.path,
        remote_addr = %entry.remote_addr,
        user_agent = %entry.user_agent,
        "request received"
    );

    if let Ok(id) = HeaderValue::from_str(&entry.request_id) {
        request.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    let mut response = next.run(request).await;

    let exit = ResponseRecord {
        request_id: entry.request_id,
        method: entry.method,
        path: entry.path,
        status: response.status().as_u16(),
        body_bytes: response.body().size_hint().exact().unwrap_or(0),
    };

    tracing::info!(
        target: "access",
        request_id = %exit.request_id,
        method = %exit.method,
        path = %exit.path,
        status = exit.status,
        body_bytes = exit.body_bytes,
        "request completed"
    );

    if let Ok(id) = HeaderValue::from_str(&exit.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    response
}
