//! Officer API handlers

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use shared::client::{LoginRequest, MessageResponse, OfficerLoginResponse};
use shared::models::{Area, AreaCreate, Officer, OfficerCreate, OfficerDetail, OfficerUpdate};

use crate::auth::jwt::KIND_OFFICER;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::permissions::{is_high_rank, require_officer};
use crate::auth::Actor;
use crate::core::ServerState;
use crate::db::repository::{area, officer};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn require_high_rank(actor: &Actor, state: &ServerState) -> Result<(), AppError> {
    if !is_high_rank(actor, &state.config) {
        return Err(AppError::forbidden(
            "Senior rank required to administer officer accounts",
        ));
    }
    Ok(())
}

/// POST /api/officer/login - officer login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<OfficerLoginResponse>> {
    let found = officer::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let found = found.ok_or_else(AppError::invalid_credentials)?;

    let password_valid =
        verify_password(&req.password, &found.hash_pass).map_err(AppError::internal)?;
    if !password_valid {
        tracing::warn!(email = %req.email, "Officer login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let tokens = state
        .jwt_service
        .generate_token_pair(found.id, KIND_OFFICER, &found.name)
        .map_err(|e| AppError::internal(format!("Failed to generate tokens: {}", e)))?;

    tracing::info!(officer_id = found.id, rank = %found.rank, "Officer logged in");

    Ok(Json(OfficerLoginResponse {
        message: "Login successful".to_string(),
        officer_id: found.id,
        rank: found.rank,
        name: found.name,
        tokens,
    }))
}

/// GET /api/officer/list - all active officers (officers only)
pub async fn list(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Officer>>> {
    require_officer(&actor)?;

    let officers = officer::find_all(&state.pool).await?;
    Ok(Json(officers))
}

/// GET /api/officer/view/:id - officer detail with area (officers only)
pub async fn view(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<OfficerDetail>> {
    require_officer(&actor)?;

    let detail = officer::find_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// GET /api/officer/areas - list patrol areas (officers only)
pub async fn list_areas(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Area>>> {
    require_officer(&actor)?;

    let areas = area::find_all(&state.pool).await?;
    Ok(Json(areas))
}

/// POST /api/officer/areas - register a patrol area (senior ranks)
pub async fn create_area(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<AreaCreate>,
) -> AppResult<(StatusCode, Json<Area>)> {
    require_high_rank(&actor, &state)?;

    if payload.city.trim().is_empty() || payload.zone.trim().is_empty() {
        return Err(AppError::validation("City and zone are required"));
    }

    let created = area::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/officer/create - enroll an officer (senior ranks)
pub async fn create(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<OfficerCreate>,
) -> AppResult<(StatusCode, Json<Officer>)> {
    require_high_rank(&actor, &state)?;

    if payload.password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if payload.name.trim().is_empty() || payload.rank.trim().is_empty() {
        return Err(AppError::validation("Name and rank are required"));
    }

    let hash = hash_password(&payload.password).map_err(AppError::internal)?;
    let created = officer::create(&state.pool, payload, &hash).await?;

    tracing::info!(officer_id = created.id, rank = %created.rank, "Officer enrolled");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/officer/update/:id - update an officer (senior ranks)
pub async fn update(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(payload): Json<OfficerUpdate>,
) -> AppResult<Json<Officer>> {
    require_high_rank(&actor, &state)?;

    let hash = match &payload.password {
        Some(password) => {
            if password.len() < 8 {
                return Err(AppError::validation(
                    "Password must be at least 8 characters",
                ));
            }
            Some(hash_password(password).map_err(AppError::internal)?)
        }
        None => None,
    };

    let updated = officer::update(&state.pool, id, payload, hash).await?;
    Ok(Json(updated))
}

/// DELETE /api/officer/delete/:id - deactivate an officer (senior ranks)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    require_high_rank(&actor, &state)?;

    officer::deactivate(&state.pool, id).await?;

    Ok(Json(MessageResponse {
        message: "Officer deactivated".to_string(),
    }))
}
