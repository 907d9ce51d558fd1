// src/store/watches.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::watch::{NewWatch, UpdateWatch, Watch};

use super::ensure_exists;

/// Inserts a new watch record. `created_at` and `modified_at` start out
/// equal.
pub async fn create(pool: &SqlitePool, new_watch: NewWatch) -> Result<Watch, DataError> {
    new_watch.validate()?;
    ensure_exists(pool, "lessons", "lesson", new_watch.lesson_id).await?;
    ensure_exists(pool, "users", "user", new_watch.user_id).await?;
    ensure_exists(pool, "modules", "module", new_watch.module_id).await?;

    let now = chrono::Utc::now();

    let watch = sqlx::query_as::<_, Watch>(
        r#"
        INSERT INTO watches
            (id, state, created_at, modified_at, "lastTime", "lessonId", "userId", "moduleId")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_watch.state.unwrap_or_default())
    .bind(now)
    .bind(now)
    .bind(new_watch.last_time.unwrap_or(0))
    .bind(new_watch.lesson_id)
    .bind(new_watch.user_id)
    .bind(new_watch.module_id)
    .fetch_one(pool)
    .await?;

    Ok(watch)
}

/// Fetches a watch record by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Watch, DataError> {
    sqlx::query_as::<_, Watch>("SELECT * FROM watches WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("watch {id} not found")))
}

/// Lists a user's watch records, most recently touched first.
pub async fn for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Watch>, DataError> {
    let watches = sqlx::query_as::<_, Watch>(
        r#"SELECT * FROM watches WHERE "userId" = ? ORDER BY modified_at DESC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(watches)
}

/// Lists the watch records of a lesson.
pub async fn for_lesson(pool: &SqlitePool, lesson_id: Uuid) -> Result<Vec<Watch>, DataError> {
    let watches =
        sqlx::query_as::<_, Watch>(r#"SELECT * FROM watches WHERE "lessonId" = ?"#)
            .bind(lesson_id)
            .fetch_all(pool)
            .await?;

    Ok(watches)
}

/// Lists the watch records of a module.
pub async fn for_module(pool: &SqlitePool, module_id: Uuid) -> Result<Vec<Watch>, DataError> {
    let watches =
        sqlx::query_as::<_, Watch>(r#"SELECT * FROM watches WHERE "moduleId" = ?"#)
            .bind(module_id)
            .fetch_all(pool)
            .await?;

    Ok(watches)
}

/// Merges a partial update into an existing watch record and bumps
/// `modified_at`.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateWatch) -> Result<Watch, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Watch>(
        r#"
        UPDATE watches
        SET state       = COALESCE(?, state),
            "lastTime"  = COALESCE(?, "lastTime"),
            modified_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(changes.state)
    .bind(changes.last_time)
    .bind(chrono::Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("watch {id} not found")))
}

/// Deletes a watch record.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    let result = sqlx::query("DELETE FROM watches WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::NotFound(format!("watch {id} not found")));
    }
    Ok(())
}
