use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InterviewError>;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("Category not found")]
    CategoryNotFound,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for InterviewError {
    fn into_response(self) -> Response {
        match self {
            Self::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDetail {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
