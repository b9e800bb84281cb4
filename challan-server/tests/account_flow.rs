//! Account and administration integration tests
//!
//! Citizen signup/login/profile, the rule catalog and officer
//! administration, exercised through the HTTP router.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

fn signup_body(cnic: &str, email: &str, bike_number: &str) -> serde_json::Value {
    json!({
        "cnic": cnic,
        "full_name": "Ayesha Khan",
        "email": email,
        "phone": "0300-1234567",
        "password": "citizen-pass-123",
        "confirm_password": "citizen-pass-123",
        "bike_number": bike_number,
        "official_copy_url": "https://files.test/official.jpg",
        "cnic_front_url": "https://files.test/front.jpg",
        "cnic_back_url": "https://files.test/back.jpg",
    })
}

#[tokio::test]
async fn signup_registers_once_per_cnic_and_email() {
    let state = test_state().await;
    let router = test_router(&state);

    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/users/signup",
            None,
            Some(signup_body("12345-1234567-1", "ayesha@test", "KHI-1234")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("please login"));

    // One transaction registered the bike, the ownership link and both
    // CNIC document copies
    let bike = challan_server::db::repository::bike::find_by_number(&state.pool, "KHI-1234")
        .await
        .unwrap()
        .expect("bike registered");
    let docs = challan_server::db::repository::bike::find_documents(&state.pool, bike.id)
        .await
        .unwrap();
    assert_eq!(docs.len(), 2);

    let user = challan_server::db::repository::website_user::find_by_email(&state.pool, "ayesha@test")
        .await
        .unwrap()
        .expect("account created");
    let links = challan_server::db::repository::bike::find_user_bikes(&state.pool, user.id)
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert!(links[0].is_primary);

    // Same CNIC again, different email and bike
    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/users/signup",
            None,
            Some(signup_body("12345-1234567-1", "other@test", "KHI-5678")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already registered"));

    // Same email, different CNIC
    let (status, _) = send(
        &router,
        json_request(
            "POST",
            "/api/users/signup",
            None,
            Some(signup_body("99999-9999999-9", "ayesha@test", "KHI-5678")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_validates_cnic_and_password() {
    let state = test_state().await;
    let router = test_router(&state);

    let mut bad_cnic = signup_body("12345-123-1", "a@test", "KHI-1111");
    bad_cnic["cnic"] = json!("12345-123-1");
    let (status, _) = send(
        &router,
        json_request("POST", "/api/users/signup", None, Some(bad_cnic)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut short_pass = signup_body("12345-1234567-1", "a@test", "KHI-1111");
    short_pass["password"] = json!("short");
    short_pass["confirm_password"] = json!("short");
    let (status, _) = send(
        &router,
        json_request("POST", "/api/users/signup", None, Some(short_pass)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut mismatch = signup_body("12345-1234567-1", "a@test", "KHI-1111");
    mismatch["confirm_password"] = json!("different-password");
    let (status, _) = send(
        &router,
        json_request("POST", "/api/users/signup", None, Some(mismatch)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_login_and_profile_round_trip() {
    let state = test_state().await;
    let router = test_router(&state);

    seed_user(&state, "12345-1234567-1", "ayesha@test", "KHI-1234").await;

    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/users/login",
            None,
            Some(json!({ "email": "ayesha@test", "password": "citizen-pass-123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let access = body["tokens"]["access"].as_str().unwrap().to_string();

    // Wrong password gets the unified message
    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/users/login",
            None,
            Some(json!({ "email": "ayesha@test", "password": "wrong" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = send(
        &router,
        json_request("GET", "/api/users/me", Some(&access), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ayesha@test");
    assert!(body.get("hash_pass").is_none());

    let (status, body) = send(
        &router,
        json_request(
            "PUT",
            "/api/users/edit",
            Some(&access),
            Some(json!({ "phone": "0333-7654321", "address": "House 5, Clifton" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "0333-7654321");
    assert_eq!(body["address"], "House 5, Clifton");

    // Deactivate; the token stops working immediately
    let (status, _) = send(
        &router,
        json_request("DELETE", "/api/users/delete", Some(&access), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        json_request("GET", "/api/users/me", Some(&access), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let state = test_state().await;
    let router = test_router(&state);

    let (status, _) = send(
        &router,
        json_request("GET", "/api/users/me", Some("not-a-jwt"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rule_catalog_is_managed_by_officers_only() {
    let state = test_state().await;
    let router = test_router(&state);

    let area_id = seed_area(&state).await;
    let (_officer, officer_token) =
        seed_officer(&state, "Inspector", "inspector@police.test", Some(area_id)).await;
    let (_user, user_token) =
        seed_user(&state, "12345-1234567-1", "owner@test", "KHI-1234").await;

    let rule_body = json!({
        "rule_name": "No Helmet",
        "description": "Riding without a helmet",
        "fine_amount": 300.0,
        "start_date": "2026-01-01",
    });

    // Citizens and anonymous callers are refused
    let (status, _) = send(
        &router,
        json_request("POST", "/api/challan/rules/add", Some(&user_token), Some(rule_body.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &router,
        json_request("POST", "/api/challan/rules/add", None, Some(rule_body.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        json_request("POST", "/api/challan/rules/add", Some(&officer_token), Some(rule_body.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rule_id = body["id"].as_i64().unwrap();

    // Duplicate name is refused
    let (status, _) = send(
        &router,
        json_request("POST", "/api/challan/rules/add", Some(&officer_token), Some(rule_body)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A zero fine is a legal warning-only rule
    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/challan/rules/add",
            Some(&officer_token),
            Some(json!({
                "rule_name": "Verbal Warning",
                "description": "warning only, no fine",
                "fine_amount": 0.0,
                "start_date": "2026-01-01",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fine_amount"].as_f64(), Some(0.0));

    // A negative fine is refused
    let (status, _) = send(
        &router,
        json_request(
            "POST",
            "/api/challan/rules/add",
            Some(&officer_token),
            Some(json!({
                "rule_name": "Negative Fine",
                "description": "bad amount",
                "fine_amount": -50.0,
                "start_date": "2026-01-01",
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Reads require a login of either kind
    let (status, _) = send(
        &router,
        json_request("GET", "/api/challan/rules/all", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        json_request("GET", "/api/challan/rules/all", Some(&user_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(2));

    let (status, body) = send(
        &router,
        json_request(
            "GET",
            &format!("/api/challan/rules/view/{}", rule_id),
            Some(&user_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule_name"], "No Helmet");
}

#[tokio::test]
async fn officer_administration_requires_senior_rank() {
    let state = test_state().await;
    let router = test_router(&state);

    let area_id = seed_area(&state).await;
    let (_inspector, inspector_token) =
        seed_officer(&state, "Inspector", "inspector@police.test", Some(area_id)).await;
    let (_constable, constable_token) =
        seed_officer(&state, "Constable", "constable@police.test", Some(area_id)).await;

    let recruit = json!({
        "rank": "ASI",
        "name": "New Recruit",
        "email": "recruit@police.test",
        "password": "officer-pass-123",
        "area_id": area_id,
    });

    // A constable is on the manage list but not the senior list
    let (status, _) = send(
        &router,
        json_request("POST", "/api/officer/create", Some(&constable_token), Some(recruit.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &router,
        json_request("POST", "/api/officer/create", Some(&inspector_token), Some(recruit.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let recruit_id = body["id"].as_i64().unwrap();
    assert!(body.get("hash_pass").is_none());

    // Duplicate email is refused
    let (status, _) = send(
        &router,
        json_request("POST", "/api/officer/create", Some(&inspector_token), Some(recruit)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Officer login works for the recruit
    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/officer/login",
            None,
            Some(json!({ "email": "recruit@police.test", "password": "officer-pass-123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rank"], "ASI");

    // Any officer can read the roster and area list
    let (status, body) = send(
        &router,
        json_request("GET", "/api/officer/list", Some(&constable_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(3));

    let (status, _) = send(
        &router,
        json_request("GET", "/api/officer/areas", Some(&constable_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // View expands the posted area
    let (status, body) = send(
        &router,
        json_request(
            "GET",
            &format!("/api/officer/view/{}", recruit_id),
            Some(&constable_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["area_details"]["city"], "Karachi");

    // Only seniors create areas
    let new_area = json!({ "city": "Lahore", "zone": "Cantt", "sub_area": "Mall Road" });
    let (status, _) = send(
        &router,
        json_request("POST", "/api/officer/areas", Some(&constable_token), Some(new_area.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &router,
        json_request("POST", "/api/officer/areas", Some(&inspector_token), Some(new_area)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Deactivation revokes access immediately
    let (status, _) = send(
        &router,
        json_request(
            "DELETE",
            &format!("/api/officer/delete/{}", recruit_id),
            Some(&inspector_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recruit_token = state
        .jwt_service
        .generate_token_pair(recruit_id, challan_server::auth::jwt::KIND_OFFICER, "New Recruit")
        .unwrap()
        .access;
    let (status, _) = send(
        &router,
        json_request("GET", "/api/officer/list", Some(&recruit_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
