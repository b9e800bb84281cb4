//! Challenge (appeal) repository
//!
//! Opening an appeal and reviewing one are both transactions whose first
//! statement is a conditional UPDATE on the challan. The update takes the
//! write lock and carries the precondition in its WHERE clause, so
//! concurrent submissions against the same challan serialize and exactly
//! one succeeds.

use sqlx::SqlitePool;

use shared::models::{
    AppealDecision, ChallanStatus, Challenge, ChallengeStatus, ChallengeUpdate,
};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Challenge> {
    sqlx::query_as::<_, Challenge>("SELECT * FROM challenge WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Appeal {} not found", id)))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Challenge>> {
    let appeals =
        sqlx::query_as::<_, Challenge>("SELECT * FROM challenge ORDER BY submitted_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(appeals)
}

pub async fn find_by_challan(pool: &SqlitePool, challan_id: i64) -> RepoResult<Vec<Challenge>> {
    let appeals = sqlx::query_as::<_, Challenge>(
        "SELECT * FROM challenge WHERE challan_id = ? ORDER BY submitted_at DESC",
    )
    .bind(challan_id)
    .fetch_all(pool)
    .await?;
    Ok(appeals)
}

/// Open an appeal against a challan.
///
/// The challan moves to UnderAppeal and the challenge row is inserted in
/// one transaction. A challan already under appeal (or missing) loses the
/// conditional update and the whole submission is rejected.
pub async fn open_appeal(
    pool: &SqlitePool,
    challan_id: i64,
    user_id: Option<i64>,
    reason: &str,
    evidence_url: Option<&str>,
) -> RepoResult<Challenge> {
    let mut tx = pool.begin().await?;

    let moved = sqlx::query("UPDATE challan SET status = ? WHERE id = ? AND status <> ?")
        .bind(ChallanStatus::UnderAppeal)
        .bind(challan_id)
        .bind(ChallanStatus::UnderAppeal)
        .execute(&mut *tx)
        .await?;

    if moved.rows_affected() == 0 {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM challan WHERE id = ?")
            .bind(challan_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.rollback().await?;

        if exists == 0 {
            return Err(RepoError::NotFound(format!(
                "Challan {} not found",
                challan_id
            )));
        }
        return Err(RepoError::Conflict(
            "Challan is already under appeal".to_string(),
        ));
    }

    let id = snowflake_id();

    sqlx::query(
        "INSERT INTO challenge (id, challan_id, user_id, reason, evidence_url, status, submitted_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(challan_id)
    .bind(user_id)
    .bind(reason)
    .bind(evidence_url)
    .bind(ChallengeStatus::Pending)
    .bind(now_millis())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id).await
}

/// Edit an appeal while it is still Pending.
pub async fn update_pending(
    pool: &SqlitePool,
    id: i64,
    data: ChallengeUpdate,
) -> RepoResult<Challenge> {
    let current = find_by_id(pool, id).await?;

    let result = sqlx::query(
        "UPDATE challenge SET reason = ?, evidence_url = ? WHERE id = ? AND status = ?",
    )
    .bind(data.reason.unwrap_or(current.reason))
    .bind(data.evidence_url.or(current.evidence_url))
    .bind(id)
    .bind(ChallengeStatus::Pending)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::Conflict(
            "Appeal has already been reviewed".to_string(),
        ));
    }

    find_by_id(pool, id).await
}

/// Record an officer's decision and resolve the challan.
///
/// Approved cancels the challan; Rejected returns it to Unpaid. The
/// challenge must still be Pending and the challan still UnderAppeal;
/// either condition failing rolls everything back. A Paid challan is
/// never reverted here.
pub async fn review(
    pool: &SqlitePool,
    id: i64,
    decision: AppealDecision,
    reviewer_id: i64,
) -> RepoResult<Challenge> {
    let current = find_by_id(pool, id).await?;

    let (new_status, challan_status) = match decision {
        AppealDecision::Approved => (ChallengeStatus::Approved, ChallanStatus::Cancelled),
        AppealDecision::Rejected => (ChallengeStatus::Rejected, ChallanStatus::Unpaid),
    };

    let mut tx = pool.begin().await?;

    let decided = sqlx::query(
        "UPDATE challenge SET status = ?, reviewed_by = ?, reviewed_at = ? WHERE id = ? AND status = ?",
    )
    .bind(new_status)
    .bind(reviewer_id)
    .bind(now_millis())
    .bind(id)
    .bind(ChallengeStatus::Pending)
    .execute(&mut *tx)
    .await?;

    if decided.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(RepoError::Conflict(
            "Appeal has already been reviewed".to_string(),
        ));
    }

    // Only a challan still under appeal is resolved; one paid in the
    // meantime keeps its Paid status.
    sqlx::query("UPDATE challan SET status = ? WHERE id = ? AND status = ?")
        .bind(challan_status)
        .bind(current.challan_id)
        .bind(ChallanStatus::UnderAppeal)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    find_by_id(pool, id).await
}
