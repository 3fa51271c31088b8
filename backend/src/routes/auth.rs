//! Authentication routes
//!
//! Provides endpoints for user registration and login. Login issues no
//! token; its response only echoes the email.

use super::extract::ApiJson;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use nutrition_tracker_shared::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/register
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    UserService::register(
        state.users(),
        state.passwords(),
        req.name,
        &req.email,
        &req.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Login with email and password
///
/// POST /api/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = UserService::login(state.users(), &req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        email,
    }))
}
