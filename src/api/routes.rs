//! Per-resource route configuration.

use crate::api::handlers::{
    create_handler, delete_handler, get_handler, list_handler, update_handler,
};
use crate::state::{AppState, Stored};
use axum::{Router, routing::get};

/// The five CRUD routes for one resource type, relative to its mount point.
///
/// # Endpoints
///
/// - `GET    /`      - List all records
/// - `POST   /`      - Create a record (id assigned server-side)
/// - `GET    /{id}`  - Fetch a record by id
/// - `PUT    /{id}`  - Partially update a record
/// - `DELETE /{id}`  - Delete a record
///
/// The router nests one instance per resource under `/api/{resource}`; see
/// [`crate::routes::router`].
pub fn resource_routes<T: Stored>() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler::<T>).post(create_handler::<T>))
        .route(
            "/{id}",
            get(get_handler::<T>)
                .put(update_handler::<T>)
                .delete(delete_handler::<T>),
        )
}
