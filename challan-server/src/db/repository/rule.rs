//! Rule catalog repository
//!
//! Fine amounts are stored as TEXT and parsed back into exact decimals;
//! a row that fails to parse is a data error, not a silent zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use shared::models::{Rule, RuleCreate, RuleUpdate};
use shared::util::{now_millis, snowflake_id};

use super::{RepoError, RepoResult};

#[derive(sqlx::FromRow)]
struct RuleRow {
    id: i64,
    rule_name: String,
    description: String,
    exemption: Option<String>,
    fine_amount: String,
    start_date: NaiveDate,
    other_penalties: Option<String>,
    created_at: i64,
}

impl TryFrom<RuleRow> for Rule {
    type Error = RepoError;

    fn try_from(row: RuleRow) -> Result<Self, Self::Error> {
        let fine_amount: Decimal = row.fine_amount.parse().map_err(|_| {
            RepoError::Database(format!("Rule {} has a malformed fine amount", row.id))
        })?;

        Ok(Rule {
            id: row.id,
            rule_name: row.rule_name,
            description: row.description,
            exemption: row.exemption,
            fine_amount,
            start_date: row.start_date,
            other_penalties: row.other_penalties,
            created_at: row.created_at,
        })
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Rule> {
    let row = sqlx::query_as::<_, RuleRow>("SELECT * FROM rule WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Rule {} not found", id)))?;

    row.try_into()
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Rule>> {
    let rows = sqlx::query_as::<_, RuleRow>("SELECT * FROM rule ORDER BY rule_name")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(Rule::try_from).collect()
}

pub async fn create(pool: &SqlitePool, data: RuleCreate) -> RepoResult<Rule> {
    let id = snowflake_id();

    let result = sqlx::query(
        "INSERT INTO rule (id, rule_name, description, exemption, fine_amount, start_date, other_penalties, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.rule_name)
    .bind(&data.description)
    .bind(&data.exemption)
    .bind(data.fine_amount.round_dp(2).to_string())
    .bind(data.start_date)
    .bind(&data.other_penalties)
    .bind(now_millis())
    .execute(pool)
    .await;

    match result {
        Ok(_) => find_by_id(pool, id).await,
        Err(e) => match RepoError::from(e) {
            RepoError::Duplicate(_) => Err(RepoError::Duplicate(format!(
                "Rule '{}' already exists",
                data.rule_name
            ))),
            other => Err(other),
        },
    }
}

pub async fn update(pool: &SqlitePool, id: i64, data: RuleUpdate) -> RepoResult<Rule> {
    let current = find_by_id(pool, id).await?;

    let result = sqlx::query(
        "UPDATE rule
         SET rule_name = ?, description = ?, exemption = ?, fine_amount = ?, start_date = ?, other_penalties = ?
         WHERE id = ?",
    )
    .bind(data.rule_name.unwrap_or(current.rule_name))
    .bind(data.description.unwrap_or(current.description))
    .bind(data.exemption.or(current.exemption))
    .bind(
        data.fine_amount
            .unwrap_or(current.fine_amount)
            .round_dp(2)
            .to_string(),
    )
    .bind(data.start_date.unwrap_or(current.start_date))
    .bind(data.other_penalties.or(current.other_penalties))
    .bind(id)
    .execute(pool)
    .await;

    match result {
        Ok(_) => find_by_id(pool, id).await,
        Err(e) => match RepoError::from(e) {
            RepoError::Duplicate(_) => {
                Err(RepoError::Duplicate("Rule name already exists".to_string()))
            }
            other => Err(other),
        },
    }
}

/// Hard delete; challans keep their snapshot amount but the FK cascades,
/// so deletion is refused while challans reference the rule.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let referenced: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM challan WHERE rule_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if referenced > 0 {
        return Err(RepoError::Conflict(
            "Rule has issued challans and cannot be deleted".to_string(),
        ));
    }

    let result = sqlx::query("DELETE FROM rule WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Rule {} not found", id)));
    }
    Ok(())
}
