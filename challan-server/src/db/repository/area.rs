//! Area repository

use sqlx::SqlitePool;

use shared::models::{Area, AreaCreate};
use shared::util::snowflake_id;

use super::{RepoError, RepoResult};

pub async fn create(pool: &SqlitePool, data: AreaCreate) -> RepoResult<Area> {
    let id = snowflake_id();

    sqlx::query("INSERT INTO area (id, city, zone, sub_area) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(&data.city)
        .bind(&data.zone)
        .bind(&data.sub_area)
        .execute(pool)
        .await?;

    find_by_id(pool, id).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Area> {
    sqlx::query_as::<_, Area>("SELECT * FROM area WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Area {} not found", id)))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Area>> {
    let areas = sqlx::query_as::<_, Area>("SELECT * FROM area ORDER BY city, zone, sub_area")
        .fetch_all(pool)
        .await?;
    Ok(areas)
}
