//! Website user repository
//!
//! Signup is a single transaction: citizen, account, bike, ownership
//! link and CNIC document copies all land together or not at all.

use chrono::Utc;
use sqlx::SqlitePool;

use shared::client::SignupRequest;
use shared::models::{CitizenCreate, DocumentType, WebsiteUser, WebsiteUserUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{bike, citizen, RepoError, RepoResult};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<WebsiteUser> {
    sqlx::query_as::<_, WebsiteUser>("SELECT * FROM website_user WHERE id = ? AND is_active = 1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<WebsiteUser>> {
    let user = sqlx::query_as::<_, WebsiteUser>(
        "SELECT * FROM website_user WHERE email = ? AND is_active = 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn email_taken(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM website_user WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Register a citizen account with their bike and document copies.
///
/// Returns the new user's ID. Uniqueness of CNIC, email and bike number
/// is enforced by the schema; a violation anywhere rolls the whole
/// signup back.
pub async fn signup(pool: &SqlitePool, req: &SignupRequest, hash_pass: &str) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    citizen::create_tx(
        &mut tx,
        &CitizenCreate {
            cnic: req.cnic.clone(),
            full_name: req.full_name.clone(),
            dob: None,
            address: String::new(),
            email: Some(req.email.clone()),
            phone: Some(req.phone.clone()),
        },
    )
    .await?;

    let user_id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO website_user (id, citizen_cnic, email, phone, address, hash_pass, is_active, created_at, updated_at)
         VALUES (?, ?, ?, ?, '', ?, 1, ?, ?)",
    )
    .bind(user_id)
    .bind(&req.cnic)
    .bind(&req.email)
    .bind(&req.phone)
    .bind(hash_pass)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM bike WHERE bike_number = ?")
        .bind(&req.bike_number)
        .fetch_optional(&mut *tx)
        .await?;

    let bike_id = match existing {
        // Bike already in the registry (e.g. issued a challan before the
        // owner signed up); link the account to it.
        Some(id) => id,
        None => {
            bike::create_tx(
                &mut tx,
                &req.bike_number,
                &req.cnic,
                Utc::now().date_naive(),
            )
            .await?
        }
    };

    bike::add_document_tx(&mut tx, bike_id, DocumentType::FrontCopy, &req.cnic_front_url).await?;
    bike::add_document_tx(&mut tx, bike_id, DocumentType::BackCopy, &req.cnic_back_url).await?;
    bike::link_user_tx(&mut tx, user_id, bike_id, Some(&req.official_copy_url), true).await?;

    tx.commit().await?;

    Ok(user_id)
}

pub async fn update(pool: &SqlitePool, id: i64, data: WebsiteUserUpdate) -> RepoResult<WebsiteUser> {
    let current = find_by_id(pool, id).await?;

    sqlx::query(
        "UPDATE website_user SET phone = ?, address = ?, profile_pic_url = ?, updated_at = ? WHERE id = ?",
    )
    .bind(data.phone.unwrap_or(current.phone))
    .bind(data.address.unwrap_or(current.address))
    .bind(data.profile_pic_url.or(current.profile_pic_url))
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await
}

/// Soft-delete the account; the citizen record and challan history stay.
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query(
        "UPDATE website_user SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {} not found", id)));
    }
    Ok(())
}
