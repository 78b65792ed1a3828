//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: application context (the in-memory account directory)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh, empty directory (used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Build the router over existing services.
pub fn build_app_with(services: Arc<AppServices>) -> Router {
    // Customer-scoped routes: require a `cpf` header naming a registered customer.
    let scoped = routes::customer_router().layer(axum::middleware::from_fn_with_state(
        services.clone(),
        middleware::customer_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(scoped)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub use services::AppServices;
