// src/store/quizsets.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::quizset::{NewQuizset, Quizset, UpdateQuizset};

use super::{ensure_exists, ensure_no_dependents};

/// Inserts a new quizset.
pub async fn create(pool: &SqlitePool, new_quizset: NewQuizset) -> Result<Quizset, DataError> {
    new_quizset.validate()?;

    let quizset = sqlx::query_as::<_, Quizset>(
        r#"
        INSERT INTO quizsets (id, title, description, slug, active)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_quizset.title)
    .bind(&new_quizset.description)
    .bind(&new_quizset.slug)
    .bind(new_quizset.active.unwrap_or(false))
    .fetch_one(pool)
    .await?;

    Ok(quizset)
}

/// Fetches a quizset by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Quizset, DataError> {
    sqlx::query_as::<_, Quizset>("SELECT * FROM quizsets WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("quizset {id} not found")))
}

/// Lists all quizsets, alphabetically.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Quizset>, DataError> {
    let quizsets = sqlx::query_as::<_, Quizset>("SELECT * FROM quizsets ORDER BY title ASC")
        .fetch_all(pool)
        .await?;

    Ok(quizsets)
}

/// Merges a partial update into an existing quizset.
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    changes: UpdateQuizset,
) -> Result<Quizset, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Quizset>(
        r#"
        UPDATE quizsets
        SET title       = COALESCE(?, title),
            description = COALESCE(?, description),
            slug        = COALESCE(?, slug),
            active      = COALESCE(?, active)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(&changes.slug)
    .bind(changes.active)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("quizset {id} not found")))
}

/// Deletes a quizset. Blocked while quizzes still belong to it; courses
/// pointing at it are detached, not removed.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "quizsets", "quizset", id).await?;
    ensure_no_dependents(pool, "quizset", id, &[("quizzes", "quizsetId")]).await?;

    // courses.quizsetId is declared ON DELETE SET NULL
    sqlx::query("DELETE FROM quizsets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
