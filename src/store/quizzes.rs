// src/store/quizzes.rs

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::quiz::{NewQuiz, Quiz, UpdateQuiz};

use super::ensure_exists;

/// Inserts a new quiz into an existing quizset.
pub async fn create(pool: &SqlitePool, new_quiz: NewQuiz) -> Result<Quiz, DataError> {
    new_quiz.validate()?;
    ensure_exists(pool, "quizsets", "quizset", new_quiz.quizset_id).await?;

    let quiz = sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (id, title, description, explanations, slug, options, mark, "quizsetId")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_quiz.title)
    .bind(&new_quiz.description)
    .bind(&new_quiz.explanations)
    .bind(&new_quiz.slug)
    .bind(Json(new_quiz.options.unwrap_or_default()))
    .bind(new_quiz.mark.unwrap_or(5))
    .bind(new_quiz.quizset_id)
    .fetch_one(pool)
    .await?;

    Ok(quiz)
}

/// Fetches a quiz by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Quiz, DataError> {
    sqlx::query_as::<_, Quiz>("SELECT * FROM quizzes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("quiz {id} not found")))
}

/// Lists the quizzes in a quizset.
pub async fn for_quizset(pool: &SqlitePool, quizset_id: Uuid) -> Result<Vec<Quiz>, DataError> {
    let quizzes =
        sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE "quizsetId" = ?"#)
            .bind(quizset_id)
            .fetch_all(pool)
            .await?;

    Ok(quizzes)
}

/// Merges a partial update into an existing quiz.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateQuiz) -> Result<Quiz, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Quiz>(
        r#"
        UPDATE quizzes
        SET title        = COALESCE(?, title),
            description  = COALESCE(?, description),
            explanations = COALESCE(?, explanations),
            slug         = COALESCE(?, slug),
            options      = COALESCE(?, options),
            mark         = COALESCE(?, mark)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(&changes.explanations)
    .bind(&changes.slug)
    .bind(changes.options.map(Json))
    .bind(changes.mark)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("quiz {id} not found")))
}

/// Deletes a quiz.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::NotFound(format!("quiz {id} not found")));
    }
    Ok(())
}
