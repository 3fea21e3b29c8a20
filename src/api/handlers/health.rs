//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// Always **200 OK**:
///
/// ```json
/// {
///   "status": "OK",
///   "message": "API is running"
/// }
/// ```
///
/// There are no components to probe: the service holds all state in process
/// memory, so a served response is the health check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "API is running",
    })
}
