use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        if error.is_validation() {
            ApiError::BadRequest(error.to_string())
        } else {
            ApiError::InternalServerError(error.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs `validator` rules.
///
/// The body is parsed as JSON whatever its `Content-Type`. Unreadable bodies,
/// malformed JSON, wrong field types and failed validation all become
/// `400 { "error": "Invalid input" }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("unreadable request body: {}", e.body_text());
            ApiError::from(CoreError::InvalidInput)
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("rejected JSON body: {}", e);
            ApiError::from(CoreError::InvalidInput)
        })?;

        value.validate().map_err(|e| {
            tracing::warn!("invalid JSON body: {}", e);
            ApiError::from(CoreError::InvalidInput)
        })?;

        Ok(ValidateJson(value))
    }
}
