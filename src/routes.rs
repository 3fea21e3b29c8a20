//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`       - Liveness check
//! - `/api/users/*`      - User CRUD
//! - `/api/cars/*`       - Car CRUD
//! - `/api/products/*`   - Product CRUD
//! - `/api/orders/*`     - Order CRUD
//! - anything else       - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::routes::resource_routes;
use crate::domain::entities::{Car, Order, Product, User};
use crate::error::{ErrorBody, ErrorInfo};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware except
/// path normalization.
///
/// Exposed separately from [`app_router`] so integration tests can mount it
/// directly on a test server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/users", resource_routes::<User>())
        .nest("/api/cars", resource_routes::<Car>())
        .nest("/api/products", resource_routes::<Product>())
        .nest("/api/orders", resource_routes::<Order>())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the full application router, with trailing-slash
/// normalization applied outermost so `/api/cars/` matches `/api/cars`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Catch-all for unmatched routes:
/// `{"error": {"message": "Route not found", "status": 404}}`.
async fn fallback_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: ErrorInfo {
                message: "Route not found".to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            },
        }),
    )
}
