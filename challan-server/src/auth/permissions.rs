//! Authorization predicates
//!
//! Thin functions over [`Actor`] and the configured rank allow-lists.
//! Handlers call these at the top and bail with Forbidden before doing
//! any work.

use crate::auth::actor::{Actor, OfficerContext};
use crate::core::config::Config;
use crate::utils::error::AppError;

pub fn is_authenticated(actor: &Actor) -> bool {
    !actor.is_anonymous()
}

pub fn is_officer(actor: &Actor) -> bool {
    matches!(actor, Actor::Officer(_))
}

/// Rule-catalog and challan management: officers whose rank is on the
/// manage list.
pub fn can_manage_rules_and_challans(actor: &Actor, config: &Config) -> bool {
    match actor {
        Actor::Officer(ctx) => config.manage_ranks.iter().any(|r| r == &ctx.rank),
        _ => false,
    }
}

/// Officer-account administration: the senior-rank list only.
pub fn is_high_rank(actor: &Actor, config: &Config) -> bool {
    match actor {
        Actor::Officer(ctx) => config.high_ranks.iter().any(|r| r == &ctx.rank),
        _ => false,
    }
}

/// Appeals may be submitted by anyone, including anonymous callers.
pub fn can_appeal(_actor: &Actor) -> bool {
    true
}

/// Require an officer actor, or fail with Forbidden.
pub fn require_officer(actor: &Actor) -> Result<&OfficerContext, AppError> {
    actor
        .as_officer()
        .ok_or_else(|| AppError::forbidden("Officer account required"))
}
