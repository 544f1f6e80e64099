use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::ApiError;

/// `Json` whose rejection renders in the response envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// `Query` whose rejection renders in the response envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);
