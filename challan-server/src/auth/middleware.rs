//! Actor-attachment middleware
//!
//! Resolves the Authorization header into an [`Actor`] extension on
//! every request. No header means Anonymous (several endpoints are
//! public); a header that fails validation is rejected outright.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::actor::{Actor, OfficerContext, UserContext};
use crate::auth::jwt::{JwtError, JwtService, KIND_OFFICER, KIND_USER};
use crate::core::state::ServerState;
use crate::db::repository::{officer, website_user};
use crate::utils::error::AppError;

pub async fn attach_actor(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let actor = match header {
        None => Actor::Anonymous,
        Some(value) => {
            let token = JwtService::extract_from_header(value)
                .ok_or_else(AppError::invalid_token)?;

            let claims = state
                .jwt_service
                .validate_access_token(token)
                .map_err(|e| match e {
                    JwtError::ExpiredToken => AppError::token_expired(),
                    _ => AppError::invalid_token(),
                })?;

            let actor_id: i64 = claims
                .sub
                .parse()
                .map_err(|_| AppError::invalid_token())?;

            // Token holders removed from the database lose access
            // immediately, not at token expiry.
            match claims.kind.as_str() {
                KIND_OFFICER => {
                    let ctx = officer::find_by_id(&state.pool, actor_id)
                        .await
                        .map_err(|_| AppError::unauthorized())?;
                    Actor::Officer(OfficerContext {
                        id: ctx.id,
                        name: ctx.name,
                        rank: ctx.rank,
                        area_id: ctx.area_id,
                    })
                }
                KIND_USER => {
                    let ctx = website_user::find_by_id(&state.pool, actor_id)
                        .await
                        .map_err(|_| AppError::unauthorized())?;
                    Actor::User(UserContext {
                        id: ctx.id,
                        email: ctx.email,
                    })
                }
                other => {
                    debug!(kind = other, "Unknown actor kind in token");
                    return Err(AppError::invalid_token());
                }
            }
        }
    };

    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}
