//! Bike repository
//!
//! Bike numbers are matched case-insensitively (the column carries
//! COLLATE NOCASE).

use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};

use shared::models::{Bike, BikeDocument, DocumentType, StolenStatus, UserBike};
use shared::util::{now_millis, snowflake_id};

use super::RepoResult;

pub async fn find_by_number(pool: &SqlitePool, bike_number: &str) -> RepoResult<Option<Bike>> {
    let bike = sqlx::query_as::<_, Bike>("SELECT * FROM bike WHERE bike_number = ?")
        .bind(bike_number)
        .fetch_optional(pool)
        .await?;
    Ok(bike)
}

/// Insert a bike inside an existing transaction (signup flow).
pub async fn create_tx(
    tx: &mut Transaction<'_, Sqlite>,
    bike_number: &str,
    owner_cnic: &str,
    registration_date: NaiveDate,
) -> RepoResult<i64> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO bike (id, bike_number, owner_cnic, registration_date, stolen_status, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(bike_number)
    .bind(owner_cnic)
    .bind(registration_date)
    .bind(StolenStatus::NotStolen)
    .bind(now)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(id)
}

/// Attach a document image to a bike inside an existing transaction.
pub async fn add_document_tx(
    tx: &mut Transaction<'_, Sqlite>,
    bike_id: i64,
    document_type: DocumentType,
    image_url: &str,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO bike_document (id, bike_id, document_type, image_url, uploaded_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(bike_id)
    .bind(document_type)
    .bind(image_url)
    .bind(now_millis())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

pub async fn find_documents(pool: &SqlitePool, bike_id: i64) -> RepoResult<Vec<BikeDocument>> {
    let docs = sqlx::query_as::<_, BikeDocument>(
        "SELECT * FROM bike_document WHERE bike_id = ? ORDER BY uploaded_at",
    )
    .bind(bike_id)
    .fetch_all(pool)
    .await?;
    Ok(docs)
}

/// Link a website user to a bike inside an existing transaction.
pub async fn link_user_tx(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    bike_id: i64,
    official_copy_url: Option<&str>,
    is_primary: bool,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO user_bike (id, user_id, bike_id, verification_status, official_copy_url, is_primary, submitted_at)
         VALUES (?, ?, ?, 'Pending', ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(user_id)
    .bind(bike_id)
    .bind(official_copy_url)
    .bind(is_primary)
    .bind(now_millis())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

pub async fn find_user_bikes(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<UserBike>> {
    let links = sqlx::query_as::<_, UserBike>(
        "SELECT * FROM user_bike WHERE user_id = ? ORDER BY submitted_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(links)
}
