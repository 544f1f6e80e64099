use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Envelope shared by every endpoint. Absent optional fields are omitted.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<String>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            error_codes: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(
        message: impl Into<String>,
        errors: Option<Vec<String>>,
        error_codes: Option<Vec<String>>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
            error_codes,
        }
    }
}

pub type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T: Serialize>(message: &str, data: T) -> Envelope<T> {
    (StatusCode::OK, Json(ApiResponse::ok(message, data)))
}

pub fn created<T: Serialize>(message: &str, data: T) -> Envelope<T> {
    (StatusCode::CREATED, Json(ApiResponse::ok(message, data)))
}
