use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pagevisits_domain::DomainError;
use tracing::{error, warn};

use crate::response::ApiResponse;

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    InvalidBody(String),
    InvalidQuery(String),
    RateLimited,
    NotFound,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Domain(DomainError::Validation(errors)) => {
                warn!(errors = %errors, "Validation error");
                let messages = errors.violations().iter().map(|v| v.to_string()).collect();
                let codes = errors.codes().into_iter().map(String::from).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiResponse::error("Validation error", Some(messages), Some(codes)),
                )
            }
            ApiError::Domain(DomainError::Storage(e)) => {
                error!(error = %e, "Request failed on storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("Internal server error", None, None),
                )
            }
            ApiError::InvalidBody(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::error(
                    "Validation error",
                    Some(vec![detail]),
                    Some(vec!["invalid_body".to_string()]),
                ),
            ),
            ApiError::InvalidQuery(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::error(
                    "Validation error",
                    Some(vec![detail]),
                    Some(vec!["invalid_query".to_string()]),
                ),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiResponse::error(
                    "Too many requests. Please try again later.",
                    None,
                    Some(vec!["rate_limit_exceeded".to_string()]),
                ),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ApiResponse::error("Not found", None, Some(vec!["not_found".to_string()])),
            ),
        };

        (status, Json(body)).into_response()
    }
}
