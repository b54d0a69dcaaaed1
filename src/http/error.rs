//! Error type for the HTTP adapter and its mapping to status codes

use crate::graph::GraphError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body has the wrong shape
    #[error("{0}")]
    Validation(String),

    /// Query matched nothing
    #[error("{0}")]
    NotFound(String),

    /// The chart refused the operation
    #[error(transparent)]
    Chart(#[from] GraphError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Chart(err) => match err {
                GraphError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                GraphError::UnknownIdentifier(_) => StatusCode::NOT_FOUND,
                GraphError::DuplicateIdentifier(_) => StatusCode::CONFLICT,
                GraphError::CyclicStructure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), "Request failed: {}", self);
        let body = json!({
            "success": false,
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EmployeeId;

    #[test]
    fn test_status_mapping() {
        let id = EmployeeId::new(1);
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(GraphError::DuplicateIdentifier(id)).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(GraphError::UnknownIdentifier(id)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(GraphError::CyclicStructure(id)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(GraphError::InvalidInput("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_chart_errors_keep_their_message() {
        let err = ApiError::from(GraphError::DuplicateIdentifier(EmployeeId::new(1)));
        assert_eq!(err.to_string(), "Employee 1 already exists");
    }
}
