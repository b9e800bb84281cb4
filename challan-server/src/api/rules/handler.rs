//! Rule catalog API handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use rust_decimal::Decimal;

use shared::models::{Rule, RuleCreate, RuleUpdate};

use crate::auth::permissions::{can_manage_rules_and_challans, is_authenticated};
use crate::auth::Actor;
use crate::core::ServerState;
use crate::db::repository::rule;
use crate::utils::{AppError, AppResult};

fn require_manage(actor: &Actor, state: &ServerState) -> Result<(), AppError> {
    if !can_manage_rules_and_challans(actor, &state.config) {
        return Err(AppError::forbidden(
            "Your rank is not authorized to manage the rule catalog",
        ));
    }
    Ok(())
}

// Zero is a legal fine (warning-only violations); negative is not.
fn validate_fine(amount: Decimal) -> Result<(), AppError> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation("Fine amount must not be negative"));
    }
    Ok(())
}

/// GET /api/challan/rules/all - list the violation catalog
pub async fn list(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<Rule>>> {
    if !is_authenticated(&actor) {
        return Err(AppError::forbidden("Please login to view the catalog"));
    }

    let rules = rule::find_all(&state.pool).await?;
    Ok(Json(rules))
}

/// GET /api/challan/rules/view/:id - single rule
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<Rule>> {
    if !is_authenticated(&actor) {
        return Err(AppError::forbidden("Please login to view the catalog"));
    }

    let rule = rule::find_by_id(&state.pool, id).await?;
    Ok(Json(rule))
}

/// POST /api/challan/rules/add - create a rule (manage ranks only)
pub async fn create(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<RuleCreate>,
) -> AppResult<Json<Rule>> {
    require_manage(&actor, &state)?;
    validate_fine(payload.fine_amount)?;

    let rule = rule::create(&state.pool, payload).await?;
    Ok(Json(rule))
}

/// PUT /api/challan/rules/update/:id - update a rule (manage ranks only)
///
/// Editing the fine never touches already-issued challans; they carry a
/// snapshot of the amount.
pub async fn update(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
    Json(payload): Json<RuleUpdate>,
) -> AppResult<Json<Rule>> {
    require_manage(&actor, &state)?;
    if let Some(amount) = payload.fine_amount {
        validate_fine(amount)?;
    }

    let rule = rule::update(&state.pool, id, payload).await?;
    Ok(Json(rule))
}

/// DELETE /api/challan/rules/delete/:id - delete a rule (manage ranks only)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_manage(&actor, &state)?;

    rule::delete(&state.pool, id).await?;
    Ok(Json(true))
}
