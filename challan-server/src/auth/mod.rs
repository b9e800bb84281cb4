//! Authentication and authorization

pub mod actor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod permissions;

pub use actor::{Actor, OfficerContext, UserContext};
pub use jwt::{JwtConfig, JwtService};
