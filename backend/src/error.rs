//! Application error handling
//!
//! Every handler returns [`ApiResult`]; this is the single place where a
//! failure becomes a status code and a JSON body.

use crate::repositories::StoreError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nutrition_tracker_shared::ErrorBody;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Email already in use")]
    EmailInUse,

    /// Covers both an unknown email and a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::EmailInUse => (StatusCode::BAD_REQUEST, message_only(&self)),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, message_only(&self)),
            ApiError::InvalidBody(rejection) => (
                rejection.status(),
                ErrorBody {
                    message: "Invalid request body".to_string(),
                    error: Some(rejection.body_text()),
                },
            ),
            // The raw detail is passed through to the caller
            ApiError::Storage(err) => {
                error!("Storage error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, server_error(err.to_string()))
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, server_error(err.to_string()))
            }
        };

        (status, Json(body)).into_response()
    }
}

fn message_only(error: &ApiError) -> ErrorBody {
    ErrorBody {
        message: error.to_string(),
        error: None,
    }
}

fn server_error(detail: String) -> ErrorBody {
    ErrorBody {
        message: "Server error".to_string(),
        error: Some(detail),
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
