//! Appeal API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use shared::models::{Challenge, ChallengeCreate, ChallengeReview, ChallengeUpdate};

use crate::auth::permissions::{
    can_appeal, can_manage_rules_and_challans, is_officer, require_officer,
};
use crate::auth::Actor;
use crate::core::ServerState;
use crate::db::repository::challenge;
use crate::utils::{AppError, AppResult};

/// POST /api/challan/appeal/create - contest a challan
///
/// Open to everyone, anonymous callers included; an anonymous appeal
/// simply carries no submitter identity. The challan moves to
/// UnderAppeal atomically with the submission, so concurrent appeals
/// against the same challan resolve to exactly one.
pub async fn create(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<ChallengeCreate>,
) -> AppResult<(StatusCode, Json<Challenge>)> {
    if !can_appeal(&actor) {
        return Err(AppError::forbidden("Appeals are closed for this account"));
    }
    if payload.reason.trim().is_empty() {
        return Err(AppError::validation("Appeal reason is required"));
    }

    let user_id = actor.as_user().map(|u| u.id);

    let appeal = challenge::open_appeal(
        &state.pool,
        payload.challan,
        user_id,
        &payload.reason,
        payload.evidence_url.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(appeal)))
}

/// PATCH /api/challan/appeal/update/:id - amend a pending appeal
///
/// An appeal submitted by a logged-in citizen belongs to that citizen:
/// only they or an officer may amend it. Anonymous submissions carry no
/// owner and stay open. A reviewed appeal is immutable either way.
pub async fn update(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(payload): Json<ChallengeUpdate>,
) -> AppResult<Json<Challenge>> {
    let current = challenge::find_by_id(&state.pool, id).await?;
    if let Some(owner) = current.user_id {
        let is_owner = actor.as_user().map(|u| u.id) == Some(owner);
        if !is_owner && !is_officer(&actor) {
            return Err(AppError::forbidden(
                "Only the submitting citizen or an officer may amend this appeal",
            ));
        }
    }

    let updated = challenge::update_pending(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// GET /api/challan/appeal/view/:id - single appeal (officers)
pub async fn view(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<Challenge>> {
    if !is_officer(&actor) {
        return Err(AppError::forbidden("Officer account required"));
    }

    let appeal = challenge::find_by_id(&state.pool, id).await?;
    Ok(Json(appeal))
}

/// GET /api/challan/appeal/all - every appeal (officers)
pub async fn all(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Challenge>>> {
    if !is_officer(&actor) {
        return Err(AppError::forbidden("Officer account required"));
    }

    let appeals = challenge::find_all(&state.pool).await?;
    Ok(Json(appeals))
}

/// POST /api/challan/appeal/review/:id - decide a pending appeal
///
/// Approved cancels the challan; Rejected returns it to Unpaid. Only
/// ranks on the manage list may review.
pub async fn review(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(payload): Json<ChallengeReview>,
) -> AppResult<Json<Challenge>> {
    if !can_manage_rules_and_challans(&actor, &state.config) {
        return Err(AppError::forbidden(
            "Your rank is not authorized to review appeals",
        ));
    }
    let officer = require_officer(&actor)?;

    let decided = challenge::review(&state.pool, id, payload.decision, officer.id).await?;
    Ok(Json(decided))
}
