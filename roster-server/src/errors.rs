use std::fmt::{Display, Formatter};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::RosterError;
use thiserror::Error;
use tracing::warn;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ApiError {
    BadRequest(String),
    Conflict(String),
    ServiceUnavailable(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Status=400, BadRequest: {}", message),
            ApiError::Conflict(message) => write!(f, "Status=409, Conflict: {}", message),
            ApiError::ServiceUnavailable(message) => {
                write!(f, "Status=503, ServiceUnavailable: {}", message)
            }
            ApiError::InternalServerError(message) => {
                write!(f, "Status=500, InternalServerError: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ServerError::ApiError(e) => {
                warn!("{}", e);
                match e {
                    ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
                    ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
                    ApiError::ServiceUnavailable(message) => {
                        (StatusCode::SERVICE_UNAVAILABLE, message)
                    }
                    ApiError::InternalServerError(message) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, message)
                    }
                }
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected Error".to_string()),
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}
