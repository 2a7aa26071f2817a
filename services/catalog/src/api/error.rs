//! 错误到 HTTP 响应的映射

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use catalog_errors::AppError;
use tracing::{error, warn};

/// HTTP 层错误包装
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, source = ?std::error::Error::source(&self.0), "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }

        let mut response = (status, Json(self.0.to_problem_details())).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
