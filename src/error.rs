use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire format for the resource-level 404: `{"error": "Car not found"}`.
#[derive(Serialize)]
struct NotFoundBody {
    error: String,
}

/// Wire format for unexpected failures and the route fallback:
/// `{"error": {"message": "...", "status": 500}}`.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: ErrorInfo,
}

#[derive(Serialize)]
pub(crate) struct ErrorInfo {
    pub(crate) message: String,
    pub(crate) status: u16,
}

#[derive(Debug)]
pub enum AppError {
    /// A lookup by id found no record. Carries the resource display name
    /// ("User", "Car", ...) used in the response body.
    NotFound { resource: &'static str },
    Internal { message: String },
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody {
                    error: format!("{resource} not found"),
                }),
            )
                .into_response(),
            AppError::Internal { message } => {
                tracing::error!("internal error: {message}");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    Json(ErrorBody {
                        error: ErrorInfo {
                            message,
                            status: status.as_u16(),
                        },
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = AppError::not_found("Car").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_status() {
        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
