//! Generic CRUD handlers shared by all four resources.
//!
//! Each handler is instantiated with a concrete resource type by the router
//! (see [`crate::api::routes::resource_routes`]). The handlers translate
//! path/body input into a repository call and map the repository's sentinel
//! results onto HTTP statuses:
//!
//! | Operation | Found            | Not found |
//! |-----------|------------------|-----------|
//! | list      | 200, full array  | -         |
//! | get       | 200, record      | 404       |
//! | create    | 201, record      | -         |
//! | update    | 200, record      | 404       |
//! | delete    | 200, message     | 404       |

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::{AppState, Stored};

/// Body returned by a successful delete:
/// `{"message": "Car deleted successfully"}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// `GET /api/{resource}` - the full collection in insertion order.
pub async fn list_handler<T: Stored>(
    State(state): State<AppState>,
) -> Result<Json<Vec<T>>, AppError> {
    let records = state.repo::<T>().list().await?;
    Ok(Json(records))
}

/// `GET /api/{resource}/{id}` - a single record, or 404.
pub async fn get_handler<T: Stored>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<T>, AppError> {
    match state.repo::<T>().find_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::not_found(T::NAME)),
    }
}

/// `POST /api/{resource}` - creates a record with a server-assigned id.
///
/// Always answers **201 Created**; the only rejection path is a body that
/// fails to deserialize into the resource's create payload.
pub async fn create_handler<T: Stored>(
    State(state): State<AppState>,
    Json(input): Json<T::Create>,
) -> Result<(StatusCode, Json<T>), AppError> {
    let record = state.repo::<T>().create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/{resource}/{id}` - shallow-merges the body over the record.
///
/// Fields absent from the body are left unchanged; the id (and other
/// server-owned fields) cannot be changed through this endpoint.
pub async fn update_handler<T: Stored>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<T::Patch>,
) -> Result<Json<T>, AppError> {
    match state.repo::<T>().update(&id, patch).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::not_found(T::NAME)),
    }
}

/// `DELETE /api/{resource}/{id}` - removes the record, or 404.
pub async fn delete_handler<T: Stored>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    if state.repo::<T>().delete(&id).await? {
        Ok(Json(DeletedResponse {
            message: format!("{} deleted successfully", T::NAME),
        }))
    } else {
        Err(AppError::not_found(T::NAME))
    }
}
