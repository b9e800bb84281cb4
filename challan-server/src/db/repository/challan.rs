//! Challan repository
//!
//! Lifecycle transitions are enforced in SQL: every state change is a
//! conditional UPDATE whose WHERE clause carries the precondition, so
//! two racing requests can never both win.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use shared::models::{Challan, ChallanStatus, ChallanUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

#[derive(sqlx::FromRow)]
struct ChallanRow {
    id: i64,
    bike_id: i64,
    rule_id: i64,
    officer_id: Option<i64>,
    area_id: Option<i64>,
    challan_date: i64,
    status: ChallanStatus,
    due_date: NaiveDate,
    payment_date: Option<i64>,
    amount_charged: String,
    evidence_url: Option<String>,
    payment_proof: Option<String>,
    is_active: bool,
    created_at: i64,
}

impl TryFrom<ChallanRow> for Challan {
    type Error = RepoError;

    fn try_from(row: ChallanRow) -> Result<Self, Self::Error> {
        let amount_charged: Decimal = row.amount_charged.parse().map_err(|_| {
            RepoError::Database(format!("Challan {} has a malformed amount", row.id))
        })?;

        Ok(Challan {
            id: row.id,
            bike_id: row.bike_id,
            rule_id: row.rule_id,
            officer_id: row.officer_id,
            area_id: row.area_id,
            challan_date: row.challan_date,
            status: row.status,
            due_date: row.due_date,
            payment_date: row.payment_date,
            amount_charged,
            evidence_url: row.evidence_url,
            payment_proof: row.payment_proof,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

/// Record a new challan. The fine amount is snapshotted by the caller
/// from the rule at issue time.
#[allow(clippy::too_many_arguments)]
pub async fn issue(
    pool: &SqlitePool,
    bike_id: i64,
    rule_id: i64,
    officer_id: i64,
    area_id: i64,
    amount_charged: Decimal,
    due_date: NaiveDate,
    evidence_url: Option<String>,
) -> RepoResult<Challan> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO challan (id, bike_id, rule_id, officer_id, area_id, challan_date, status, due_date, amount_charged, evidence_url, is_active, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
    )
    .bind(id)
    .bind(bike_id)
    .bind(rule_id)
    .bind(officer_id)
    .bind(area_id)
    .bind(now)
    .bind(ChallanStatus::Unpaid)
    .bind(due_date)
    .bind(amount_charged.round_dp(2).to_string())
    .bind(evidence_url)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Challan> {
    let row = sqlx::query_as::<_, ChallanRow>("SELECT * FROM challan WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Challan {} not found", id)))?;

    row.try_into()
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Challan>> {
    let rows =
        sqlx::query_as::<_, ChallanRow>("SELECT * FROM challan ORDER BY challan_date DESC")
            .fetch_all(pool)
            .await?;

    rows.into_iter().map(Challan::try_from).collect()
}

/// Public lookup by plate, case-insensitive.
pub async fn find_by_bike_number(pool: &SqlitePool, bike_number: &str) -> RepoResult<Vec<Challan>> {
    let rows = sqlx::query_as::<_, ChallanRow>(
        "SELECT c.* FROM challan c
         JOIN bike b ON b.id = c.bike_id
         WHERE b.bike_number = ?
         ORDER BY c.challan_date DESC",
    )
    .bind(bike_number)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Challan::try_from).collect()
}

/// Challans on every bike linked to the given website user.
pub async fn find_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Challan>> {
    let rows = sqlx::query_as::<_, ChallanRow>(
        "SELECT c.* FROM challan c
         JOIN user_bike ub ON ub.bike_id = c.bike_id
         WHERE ub.user_id = ?
         ORDER BY c.challan_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Challan::try_from).collect()
}

/// Administrative field update; does not go through the state machine.
pub async fn update(pool: &SqlitePool, id: i64, data: ChallanUpdate) -> RepoResult<Challan> {
    let current = find_by_id(pool, id).await?;

    sqlx::query(
        "UPDATE challan SET status = ?, due_date = ?, evidence_url = ?, is_active = ? WHERE id = ?",
    )
    .bind(data.status.unwrap_or(current.status))
    .bind(data.due_date.unwrap_or(current.due_date))
    .bind(data.evidence_url.or(current.evidence_url))
    .bind(data.is_active.unwrap_or(current.is_active))
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM challan WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Challan {} not found", id)));
    }
    Ok(())
}

/// Mark a challan paid. Atomic: the precondition (not already Paid)
/// rides in the WHERE clause, so a double-pay race resolves to exactly
/// one winner.
pub async fn pay(pool: &SqlitePool, id: i64, payment_proof: &str) -> RepoResult<Challan> {
    let result = sqlx::query(
        "UPDATE challan SET status = ?, payment_date = ?, payment_proof = ? WHERE id = ? AND status <> ?",
    )
    .bind(ChallanStatus::Paid)
    .bind(now_millis())
    .bind(payment_proof)
    .bind(id)
    .bind(ChallanStatus::Paid)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        // Distinguish a missing challan from one already settled
        find_by_id(pool, id).await?;
        return Err(RepoError::Conflict("Challan is already paid".to_string()));
    }

    find_by_id(pool, id).await
}
