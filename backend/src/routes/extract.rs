//! Request extractors

use crate::error::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` whose rejections go through [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
