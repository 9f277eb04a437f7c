//! HTTP surface: router, handlers, and the uniform error envelope.

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{build_router, with_middleware, AppState, HttpServer};
