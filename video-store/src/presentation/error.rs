use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application_service::video_service::VideoServiceError;
use crate::domain::ValidationErrors;

pub const VIDEO_NOT_FOUND: &str = "Video not found";

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"message": "Video not found"}`
    NotFound,
    /// 400 `{"errorsMessages": [...]}`
    Validation(ValidationErrors),
    /// 500 `{"message": ...}`
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<VideoServiceError> for ApiError {
    fn from(e: VideoServiceError) -> Self {
        match e {
            VideoServiceError::NotFound => ApiError::NotFound,
            VideoServiceError::Validation(errors) => ApiError::Validation(errors),
            VideoServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: VIDEO_NOT_FOUND.to_string(),
                }),
            )
                .into_response(),
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_service::video_service::VideoRepositoryError;

    #[test]
    fn maps_service_errors_to_status_codes() {
        let cases = [
            (VideoServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                VideoServiceError::Validation(ValidationErrors::default()),
                StatusCode::BAD_REQUEST,
            ),
            (
                VideoServiceError::Repository(VideoRepositoryError::Storage("poisoned".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
