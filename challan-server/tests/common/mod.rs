//! Shared harness for integration tests
//!
//! Builds a full router over an in-memory database and mints tokens
//! directly, so tests do not depend on the login endpoints (which carry
//! a fixed anti-timing delay).

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use challan_server::auth::jwt::{JwtConfig, KIND_OFFICER, KIND_USER};
use challan_server::auth::password::hash_password;
use challan_server::db::repository::{area, challan, officer, rule, website_user};
use challan_server::db::DbService;
use challan_server::{api, Config, ServerState};
use shared::client::SignupRequest;
use shared::models::{
    AreaCreate, Challan, Officer, OfficerCreate, Rule, RuleCreate, WebsiteUser,
};

pub fn test_config() -> Config {
    Config {
        database_path: ":memory:".to_string(),
        http_port: 0,
        environment: "development".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789-abcdef".to_string(),
            expiration_minutes: 60,
            refresh_expiration_minutes: 120,
            issuer: "challan-server".to_string(),
            audience: "challan-clients".to_string(),
        },
        manage_ranks: vec![
            "Constable".to_string(),
            "Head Constable".to_string(),
            "ASI".to_string(),
            "SI".to_string(),
            "Inspector".to_string(),
        ],
        high_ranks: vec!["Inspector".to_string(), "SI".to_string()],
        challan_due_days: 14,
        mail_relay_url: None,
        mail_from: "no-reply@test".to_string(),
    }
}

pub async fn test_state() -> ServerState {
    let db = DbService::memory().await.expect("in-memory db");
    ServerState::assemble(test_config(), db.pool().clone())
}

pub fn test_router(state: &ServerState) -> Router {
    api::router(state.clone())
}

// ---------- seeding ----------

pub async fn seed_area(state: &ServerState) -> i64 {
    area::create(
        &state.pool,
        AreaCreate {
            city: "Karachi".to_string(),
            zone: "South".to_string(),
            sub_area: "Clifton".to_string(),
        },
    )
    .await
    .expect("seed area")
    .id
}

/// Enroll an officer of the given rank, posted to `area_id`, and mint
/// an access token for them.
pub async fn seed_officer(
    state: &ServerState,
    rank: &str,
    email: &str,
    area_id: Option<i64>,
) -> (Officer, String) {
    let hash = hash_password("officer-pass-123").expect("hash");
    let created = officer::create(
        &state.pool,
        OfficerCreate {
            rank: rank.to_string(),
            name: format!("{} Test", rank),
            email: email.to_string(),
            password: "officer-pass-123".to_string(),
            area_id,
            profile_pic_url: None,
            status: None,
        },
        &hash,
    )
    .await
    .expect("seed officer");

    let token = state
        .jwt_service
        .generate_token_pair(created.id, KIND_OFFICER, &created.name)
        .expect("token")
        .access;

    (created, token)
}

/// Register a citizen (with their bike) and mint an access token.
pub async fn seed_user(
    state: &ServerState,
    cnic: &str,
    email: &str,
    bike_number: &str,
) -> (WebsiteUser, String) {
    let hash = hash_password("citizen-pass-123").expect("hash");
    let user_id = website_user::signup(
        &state.pool,
        &SignupRequest {
            cnic: cnic.to_string(),
            full_name: "Test Citizen".to_string(),
            email: email.to_string(),
            phone: "0300-1234567".to_string(),
            password: "citizen-pass-123".to_string(),
            confirm_password: "citizen-pass-123".to_string(),
            bike_number: bike_number.to_string(),
            official_copy_url: "https://files.test/official.jpg".to_string(),
            cnic_front_url: "https://files.test/front.jpg".to_string(),
            cnic_back_url: "https://files.test/back.jpg".to_string(),
        },
        &hash,
    )
    .await
    .expect("seed user");

    let user = website_user::find_by_id(&state.pool, user_id)
        .await
        .expect("seeded user");

    let token = state
        .jwt_service
        .generate_token_pair(user.id, KIND_USER, &user.email)
        .expect("token")
        .access;

    (user, token)
}

pub async fn seed_rule(state: &ServerState, name: &str, fine: &str) -> Rule {
    rule::create(
        &state.pool,
        RuleCreate {
            rule_name: name.to_string(),
            description: format!("{} description", name),
            exemption: None,
            fine_amount: fine.parse::<Decimal>().expect("decimal"),
            start_date: Utc::now().date_naive(),
            other_penalties: None,
        },
    )
    .await
    .expect("seed rule")
}

pub async fn seed_challan(
    state: &ServerState,
    bike_number: &str,
    rule: &Rule,
    officer: &Officer,
) -> Challan {
    let bike = challan_server::db::repository::bike::find_by_number(&state.pool, bike_number)
        .await
        .expect("bike query")
        .expect("seeded bike");

    challan::issue(
        &state.pool,
        bike.id,
        rule.id,
        officer.id,
        officer.area_id.expect("officer area"),
        rule.fine_amount,
        Utc::now().date_naive() + chrono::Duration::days(14),
        None,
    )
    .await
    .expect("seed challan")
}

// ---------- requests ----------

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    builder.body(body).expect("request")
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
