//! Citizen repository

use sqlx::{Sqlite, SqlitePool, Transaction};

use shared::models::{Citizen, CitizenCreate};
use shared::util::now_millis;

use super::{RepoError, RepoResult};

pub async fn find_by_cnic(pool: &SqlitePool, cnic: &str) -> RepoResult<Citizen> {
    sqlx::query_as::<_, Citizen>("SELECT * FROM citizen WHERE cnic = ?")
        .bind(cnic)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Citizen {} not found", cnic)))
}

pub async fn exists(pool: &SqlitePool, cnic: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM citizen WHERE cnic = ?")
        .bind(cnic)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Insert a citizen inside an existing transaction (signup flow).
pub async fn create_tx(tx: &mut Transaction<'_, Sqlite>, data: &CitizenCreate) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO citizen (cnic, full_name, dob, address, email, phone, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.cnic)
    .bind(&data.full_name)
    .bind(data.dob)
    .bind(&data.address)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(now_millis())
    .execute(&mut **tx)
    .await?;

    Ok(())
}
