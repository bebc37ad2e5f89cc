//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::auth::CredentialVerifier;

/// Auth state for authentication handlers
#[derive(Clone)]
pub struct AuthHandlerState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "email": "bilgi@gallaxdesign.com",
    "password": "gallax11"
}))]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Password
    pub password: String,
}

/// Successful login payload
///
/// The token is passed on subsequent requests in the
/// `Authorization: Bearer <token>` header.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for all protected routes
    pub token: String,
    /// Human-readable confirmation
    pub message: String,
}

/// Login with the configured credential pair
///
/// Unknown email and wrong password collapse to the same 401.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, returns the bearer token", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(token) = state.verifier.verify_login(&request.email, &request.password) else {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    };

    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}
