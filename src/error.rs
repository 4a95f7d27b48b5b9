use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skin_tone::AnalysisError;
use thiserror::Error;

use crate::models::AnalyzeResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image data supplied: provide imageBase64 or imageUrl")]
    MissingInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Image fetch failed: {0}")]
    ImageFetchFailed(String),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::services::FetchError> for ApiError {
    fn from(e: crate::services::FetchError) -> Self {
        use crate::services::FetchError;
        match &e {
            FetchError::InvalidUrl(_) => ApiError::InvalidInput(e.to_string()),
            _ => ApiError::ImageFetchFailed(e.to_string()),
        }
    }
}

impl ApiError {
    /// `true` for errors caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        match self {
            ApiError::MissingInput | ApiError::InvalidInput(_) => true,
            ApiError::Analysis(e) => e.is_client_error(),
            ApiError::ImageFetchFailed(_) | ApiError::Internal(_) => false,
        }
    }

    pub fn status(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures still return a complete analysis payload.
        if !self.is_client_error() {
            let body = Json(AnalyzeResponse::safe_default(self.to_string()));
            return (status, body).into_response();
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
