//! Translation of service errors into HTTP responses.
//!
//! Services return `anyhow::Error`; a [`SalonError`] anywhere in the chain
//! picks the status code, anything else is a 500. The body is always
//! `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::backend::domain::error::SalonError;
use shared::ErrorResponse;

#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<SalonError>() {
            Some(SalonError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Some(SalonError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Some(SalonError::UnresolvedReference { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(SalonError::InUse { .. }) => StatusCode::CONFLICT,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<SalonError> for ApiError {
    fn from(err: SalonError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
