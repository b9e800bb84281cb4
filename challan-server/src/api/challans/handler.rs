//! Challan API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;

use shared::models::{
    Challan, ChallanIssue, ChallanUpdate, PayRequest, EVIDENCE_URL_SENTINEL,
};

use crate::auth::permissions::{can_manage_rules_and_challans, is_authenticated};
use crate::auth::Actor;
use crate::core::ServerState;
use crate::db::repository::{bike, challan, citizen, rule};
use crate::services::{notify, ChallanNotice};
use crate::utils::{AppError, AppResult};

fn require_manage(actor: &Actor, state: &ServerState) -> Result<(), AppError> {
    if !can_manage_rules_and_challans(actor, &state.config) {
        return Err(AppError::forbidden(
            "Your rank is not authorized to manage challans",
        ));
    }
    Ok(())
}

/// POST /api/challan/create - issue a challan (manage ranks only)
///
/// The fine amount is snapshotted from the rule; the issuing officer
/// must be posted to an area. The owner is notified best-effort.
pub async fn create(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<ChallanIssue>,
) -> AppResult<(StatusCode, Json<Challan>)> {
    require_manage(&actor, &state)?;
    let officer = actor
        .as_officer()
        .ok_or_else(|| AppError::forbidden("Officer account required"))?;

    let area_id = officer.area_id.ok_or_else(|| {
        AppError::validation("Issuing officer is not assigned to an area")
    })?;

    let target_bike = bike::find_by_number(&state.pool, &payload.bike_number)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Bike {} not found", payload.bike_number))
        })?;

    let violated_rule = rule::find_by_id(&state.pool, payload.rule_id).await?;

    let due_date = Utc::now().date_naive() + Duration::days(state.config.challan_due_days);
    let evidence_url = payload
        .evidence_url
        .or_else(|| Some(EVIDENCE_URL_SENTINEL.to_string()));

    let issued = challan::issue(
        &state.pool,
        target_bike.id,
        violated_rule.id,
        officer.id,
        area_id,
        violated_rule.fine_amount,
        due_date,
        evidence_url,
    )
    .await?;

    if let Ok(owner) = citizen::find_by_cnic(&state.pool, &target_bike.owner_cnic).await {
        if let Some(email) = owner.email {
            notify::dispatch(
                state.notifier.clone(),
                ChallanNotice {
                    to_email: email,
                    bike_number: target_bike.bike_number,
                    rule_name: violated_rule.rule_name,
                    amount: issued.amount_charged.to_string(),
                    due_date: issued.due_date.to_string(),
                    challan_id: issued.id,
                },
            );
        }
    }

    Ok((StatusCode::CREATED, Json(issued)))
}

/// PUT /api/challan/update/:id - administrative update (manage ranks only)
pub async fn update(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(payload): Json<ChallanUpdate>,
) -> AppResult<Json<Challan>> {
    require_manage(&actor, &state)?;

    let updated = challan::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/challan/delete/:id - remove a challan (manage ranks only)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_manage(&actor, &state)?;

    challan::delete(&state.pool, id).await?;
    Ok(Json(true))
}

/// GET /api/challan/view/:id - single challan (any authenticated actor)
pub async fn view(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<Challan>> {
    if !is_authenticated(&actor) {
        return Err(AppError::forbidden("Please login first"));
    }

    let found = challan::find_by_id(&state.pool, id).await?;
    Ok(Json(found))
}

/// GET /api/challan/all - every challan (any authenticated actor)
pub async fn all(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Challan>>> {
    if !is_authenticated(&actor) {
        return Err(AppError::forbidden("Please login first"));
    }

    let challans = challan::find_all(&state.pool).await?;
    Ok(Json(challans))
}

/// GET /api/challan/my-challans - challans on the caller's linked bikes
pub async fn my_challans(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Challan>>> {
    let user = actor
        .as_user()
        .ok_or_else(|| AppError::forbidden("Citizen account required"))?;

    let challans = challan::find_for_user(&state.pool, user.id).await?;
    Ok(Json(challans))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub bike_number: Option<String>,
}

/// GET /api/challan/public/search?bike_number=... - public plate lookup
pub async fn public_search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Challan>>> {
    let bike_number = query
        .bike_number
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::validation("bike_number query parameter is required"))?;

    // An unknown plate is a 404, not an empty list
    bike::find_by_number(&state.pool, &bike_number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Bike {} not found", bike_number)))?;

    let challans = challan::find_by_bike_number(&state.pool, &bike_number).await?;
    Ok(Json(challans))
}

/// POST /api/challan/public/pay/:id - pay a challan (bearer semantics,
/// no ownership check; anyone holding the reference may settle it)
pub async fn public_pay(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PayRequest>,
) -> AppResult<Json<Challan>> {
    if payload.payment_proof.trim().is_empty() {
        return Err(AppError::validation("payment_proof is required"));
    }

    let paid = challan::pay(&state.pool, id, &payload.payment_proof).await?;
    Ok(Json(paid))
}
