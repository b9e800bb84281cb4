//! Officer repository

use sqlx::SqlitePool;

use shared::models::{DutyStatus, Officer, OfficerCreate, OfficerDetail, OfficerUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{area, RepoError, RepoResult};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Officer> {
    sqlx::query_as::<_, Officer>("SELECT * FROM officer WHERE id = ? AND is_active = 1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Officer {} not found", id)))
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Officer>> {
    let officer =
        sqlx::query_as::<_, Officer>("SELECT * FROM officer WHERE email = ? AND is_active = 1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(officer)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Officer>> {
    let officers =
        sqlx::query_as::<_, Officer>("SELECT * FROM officer WHERE is_active = 1 ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(officers)
}

/// Detail view with the assigned area expanded.
pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<OfficerDetail> {
    let officer = find_by_id(pool, id).await?;

    let area_details = match officer.area_id {
        Some(area_id) => area::find_by_id(pool, area_id).await.ok(),
        None => None,
    };

    Ok(OfficerDetail {
        id: officer.id,
        rank: officer.rank,
        name: officer.name,
        profile_pic_url: officer.profile_pic_url,
        email: officer.email,
        area_id: officer.area_id,
        area_details,
        status: officer.status,
        created_at: officer.created_at,
        updated_at: officer.updated_at,
    })
}

pub async fn create(pool: &SqlitePool, data: OfficerCreate, hash_pass: &str) -> RepoResult<Officer> {
    if let Some(area_id) = data.area_id {
        area::find_by_id(pool, area_id).await?;
    }

    let id = snowflake_id();
    let now = now_millis();

    let result = sqlx::query(
        "INSERT INTO officer (id, rank, name, profile_pic_url, email, hash_pass, area_id, status, is_active, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(id)
    .bind(&data.rank)
    .bind(&data.name)
    .bind(&data.profile_pic_url)
    .bind(&data.email)
    .bind(hash_pass)
    .bind(data.area_id)
    .bind(data.status.unwrap_or(DutyStatus::Active))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => find_by_id(pool, id).await,
        Err(e) => match RepoError::from(e) {
            RepoError::Duplicate(_) => Err(RepoError::Duplicate(format!(
                "Officer with email {} already exists",
                data.email
            ))),
            other => Err(other),
        },
    }
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: OfficerUpdate,
    hash_pass: Option<String>,
) -> RepoResult<Officer> {
    let current = find_by_id(pool, id).await?;

    if let Some(area_id) = data.area_id {
        area::find_by_id(pool, area_id).await?;
    }

    sqlx::query(
        "UPDATE officer
         SET rank = ?, name = ?, email = ?, hash_pass = ?, area_id = ?, profile_pic_url = ?, status = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(data.rank.unwrap_or(current.rank))
    .bind(data.name.unwrap_or(current.name))
    .bind(data.email.unwrap_or(current.email))
    .bind(hash_pass.unwrap_or(current.hash_pass))
    .bind(data.area_id.or(current.area_id))
    .bind(data.profile_pic_url.or(current.profile_pic_url))
    .bind(data.status.unwrap_or(current.status))
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await
}

/// Soft-delete: the officer stops authenticating but stays referenced
/// by historic challans.
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("UPDATE officer SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Officer {} not found", id)));
    }
    Ok(())
}
