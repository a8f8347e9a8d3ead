//! Router assembly
//!
//! Mounts the ledger under `/v1` and wraps it in tracing and CORS layers.

use axum::{
    Router, http,
    http::{Method, header},
};
use kernel::error::app_error::AppError;
use ledger::{PgLedgerRepository, ledger_router};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

pub fn build_app(pool: PgPool, config: &ApiConfig) -> Router {
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    let repo = PgLedgerRepository::new(pool);

    Router::new()
        .nest("/v1", ledger_router(repo, config.ledger.clone()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found").with_action("Check the request path and method")
}
