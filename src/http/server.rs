//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all informational routes
//! - Wire up middleware (tracing, access log, catch-panic, timeout)
//! - Normalize 404/405 into the error envelope via fallbacks
//! - Attach HSTS / CORS layers according to configuration
//! - Serve until shutdown signal

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body, http::StatusCode, middleware, response::IntoResponse, response::Response,
    routing::get, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::response::ErrorEnvelope;
use crate::observability::access_log;
use crate::security::headers;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers. Configuration only; there is
/// no mutable shared state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// HTTP server for the status service.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let router = build_router(config.clone());
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            app_name = %self.config.app_name,
            version = %self.config.app_version,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

}

/// Build the Axum router with all routes and middleware layers.
pub fn build_router(config: Arc<AppConfig>) -> Router {
    let state = AppState {
        config: config.clone(),
    };

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/config", get(handlers::config_echo))
        .route("/security-headers", get(handlers::security_headers))
        .route("/ssl-status", get(handlers::ssl_status))
        .route("/force-https-test", get(handlers::force_https_test))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state);

    with_middleware(router, &config)
}

/// Compose the cross-cutting stack onto a router.
///
/// Layer order matters: catch-panic sits closest to the handlers so the
/// access log observes the 500 it produces; trace is outermost. Routes must
/// be registered before this is applied or they bypass the stack entirely.
#[allow(deprecated)]
pub fn with_middleware(router: Router, config: &AppConfig) -> Router {
    let mut router = router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(access_log::record))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http());

    if config.force_https {
        router = router.layer(headers::hsts_layer());
    }
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Convert a handler panic into the generic 500 envelope. The panic payload
/// is logged server-side and never reaches the client.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "opaque panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked");

    ErrorEnvelope::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
