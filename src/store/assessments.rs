// src/store/assessments.rs

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::assessment::{Assessment, NewAssessment, UpdateAssessment};

use super::ensure_exists;

/// Inserts a new assessment.
pub async fn create(
    pool: &SqlitePool,
    new_assessment: NewAssessment,
) -> Result<Assessment, DataError> {
    new_assessment.validate()?;

    let assessment = sqlx::query_as::<_, Assessment>(
        r#"
        INSERT INTO assessments (id, assessments, "otherMarks")
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Json(new_assessment.assessments.unwrap_or_default()))
    .bind(new_assessment.other_marks.unwrap_or(0.0))
    .fetch_one(pool)
    .await?;

    Ok(assessment)
}

/// Fetches an assessment by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Assessment, DataError> {
    sqlx::query_as::<_, Assessment>("SELECT * FROM assessments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("assessment {id} not found")))
}

/// Merges a partial update into an existing assessment.
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    changes: UpdateAssessment,
) -> Result<Assessment, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Assessment>(
        r#"
        UPDATE assessments
        SET assessments  = COALESCE(?, assessments),
            "otherMarks" = COALESCE(?, "otherMarks")
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(changes.assessments.map(Json))
    .bind(changes.other_marks)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("assessment {id} not found")))
}

/// Deletes an assessment. A report linking to it is detached, not removed.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "assessments", "assessment", id).await?;

    // reports.quizAssessmentId is declared ON DELETE SET NULL
    sqlx::query("DELETE FROM assessments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
