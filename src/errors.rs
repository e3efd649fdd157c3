use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::{services::gemini::ModelError, storage::StoreError};

pub const QUOTA_EXCEEDED_DETAIL: &str = "Daily usage limit exceeded. Service will resume tomorrow.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{}", QUOTA_EXCEEDED_DETAIL)]
    QuotaExceeded,

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Model(_) | AppError::Store(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Model(ref e) => tracing::error!("Model error: {}", e),
            AppError::Store(ref e) => tracing::error!("Store error: {}", e),
            AppError::Internal(ref e) => tracing::error!("Internal error: {}", e),
            AppError::InvalidBody(ref e) => tracing::warn!("Rejected request body: {}", e.body_text()),
            AppError::QuotaExceeded => {}
        }

        let body = Json(ErrorBody {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// `Json` extractor whose rejections use the `{"detail": ...}` error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
