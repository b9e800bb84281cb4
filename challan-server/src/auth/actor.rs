//! Request actor
//!
//! Every request carries exactly one [`Actor`], attached by the auth
//! middleware. Handlers match on the variant instead of re-parsing
//! tokens.

use serde::{Deserialize, Serialize};

/// Officer identity resolved from a valid token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerContext {
    pub id: i64,
    pub name: String,
    pub rank: String,
    pub area_id: Option<i64>,
}

/// Website-user identity resolved from a valid token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub id: i64,
    pub email: String,
}

/// The authenticated (or not) caller of a request.
#[derive(Debug, Clone)]
pub enum Actor {
    Officer(OfficerContext),
    User(UserContext),
    Anonymous,
}

impl Actor {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }

    pub fn as_officer(&self) -> Option<&OfficerContext> {
        match self {
            Actor::Officer(ctx) => Some(ctx),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&UserContext> {
        match self {
            Actor::User(ctx) => Some(ctx),
            _ => None,
        }
    }
}
