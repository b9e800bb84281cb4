//! Citizen account handlers

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Extension, Json};

use shared::client::{LoginRequest, MessageResponse, SignupRequest, UserLoginResponse};
use shared::models::{WebsiteUserInfo, WebsiteUserUpdate};
use shared::util::is_valid_cnic;

use crate::auth::jwt::KIND_USER;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::Actor;
use crate::core::ServerState;
use crate::db::repository::{citizen, website_user, RepoError};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/users/signup - register a citizen account
///
/// Creates the citizen, the account, the bike and the document copies
/// in one transaction. CNIC and email are globally unique.
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if !is_valid_cnic(&req.cnic) {
        return Err(AppError::validation(
            "CNIC must match the 12345-1234567-1 format",
        ));
    }
    if req.password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if req.password != req.confirm_password {
        return Err(AppError::validation("Passwords do not match"));
    }
    if req.full_name.trim().is_empty() || req.bike_number.trim().is_empty() {
        return Err(AppError::validation("Full name and bike number are required"));
    }
    if !req.email.contains('@') {
        return Err(AppError::validation("A valid email address is required"));
    }

    if citizen::exists(&state.pool, &req.cnic).await?
        || website_user::email_taken(&state.pool, &req.email).await?
    {
        return Err(AppError::conflict(
            "This CNIC or email is already registered, please login",
        ));
    }

    let hash = hash_password(&req.password).map_err(AppError::internal)?;

    let user_id = match website_user::signup(&state.pool, &req, &hash).await {
        Ok(id) => id,
        // Schema-level uniqueness backstop for races past the pre-check
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::conflict(
                "This CNIC or email is already registered, please login",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id, cnic = %req.cnic, "Citizen account registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Account created successfully, please login".to_string(),
        }),
    ))
}

/// POST /api/users/login - citizen login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<UserLoginResponse>> {
    let user = website_user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent account enumeration
    let user = user.ok_or_else(AppError::invalid_credentials)?;

    let password_valid =
        verify_password(&req.password, &user.hash_pass).map_err(AppError::internal)?;
    if !password_valid {
        tracing::warn!(email = %req.email, "User login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let tokens = state
        .jwt_service
        .generate_token_pair(user.id, KIND_USER, &user.email)
        .map_err(|e| AppError::internal(format!("Failed to generate tokens: {}", e)))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(UserLoginResponse {
        message: "Login successful".to_string(),
        user_id: user.id,
        email: user.email,
        tokens,
    }))
}

/// GET /api/users/me - current account profile
pub async fn me(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<WebsiteUserInfo>> {
    let ctx = actor
        .as_user()
        .ok_or_else(|| AppError::forbidden("Citizen account required"))?;

    let user = website_user::find_by_id(&state.pool, ctx.id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/edit - update own profile
pub async fn edit(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<WebsiteUserUpdate>,
) -> AppResult<Json<WebsiteUserInfo>> {
    let ctx = actor
        .as_user()
        .ok_or_else(|| AppError::forbidden("Citizen account required"))?;

    let updated = website_user::update(&state.pool, ctx.id, payload).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/delete - deactivate own account
pub async fn delete(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<MessageResponse>> {
    let ctx = actor
        .as_user()
        .ok_or_else(|| AppError::forbidden("Citizen account required"))?;

    website_user::deactivate(&state.pool, ctx.id).await?;

    tracing::info!(user_id = ctx.id, "Citizen account deactivated");

    Ok(Json(MessageResponse {
        message: "Account deleted".to_string(),
    }))
}
