// src/store/reports.rs

use std::collections::HashSet;

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::report::{NewReport, Report, UpdateReport};

use super::ensure_exists;

/// Checks that the completed-id lists only contain modules and lessons that
/// actually belong to the course.
async fn ensure_subsets(
    pool: &SqlitePool,
    course_id: Uuid,
    completed_modules: &[Uuid],
    completed_lessons: &[Uuid],
) -> Result<(), DataError> {
    if completed_modules.is_empty() && completed_lessons.is_empty() {
        return Ok(());
    }

    let module_ids: HashSet<Uuid> =
        sqlx::query_scalar(r#"SELECT id FROM modules WHERE "courseId" = ?"#)
            .bind(course_id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

    let lesson_ids: HashSet<Uuid> = sqlx::query_scalar(
        r#"
        SELECT l.id
        FROM lessons l
        JOIN modules m ON l."moduleId" = m.id
        WHERE m."courseId" = ?
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .collect();

    if let Some(stray) = completed_modules.iter().find(|m| !module_ids.contains(m)) {
        return Err(DataError::Validation(format!(
            "module {stray} is not part of course {course_id}"
        )));
    }
    if let Some(stray) = completed_lessons.iter().find(|l| !lesson_ids.contains(l)) {
        return Err(DataError::Validation(format!(
            "lesson {stray} is not part of course {course_id}"
        )));
    }
    Ok(())
}

/// Inserts a new progress report. At most one report may link to any given
/// assessment; a second link fails with `UniquenessConflict`.
pub async fn create(pool: &SqlitePool, new_report: NewReport) -> Result<Report, DataError> {
    new_report.validate()?;
    ensure_exists(pool, "courses", "course", new_report.course_id).await?;
    ensure_exists(pool, "users", "student", new_report.student_id).await?;
    if let Some(assessment_id) = new_report.quiz_assessment_id {
        ensure_exists(pool, "assessments", "assessment", assessment_id).await?;
    }

    let completed_modules = new_report.total_completed_modules.unwrap_or_default();
    let completed_lessons = new_report.total_completed_lessons.unwrap_or_default();
    ensure_subsets(pool, new_report.course_id, &completed_modules, &completed_lessons).await?;

    let report = sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports
            (id, "totalCompletedLessons", "totalCompletedModules", completion_date,
             "courseId", "studentId", "quizAssessmentId")
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Json(completed_lessons))
    .bind(Json(completed_modules))
    .bind(new_report.completion_date)
    .bind(new_report.course_id)
    .bind(new_report.student_id)
    .bind(new_report.quiz_assessment_id)
    .fetch_one(pool)
    .await?;

    Ok(report)
}

/// Fetches a report by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Report, DataError> {
    sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("report {id} not found")))
}

/// Lists the reports of a course.
pub async fn for_course(pool: &SqlitePool, course_id: Uuid) -> Result<Vec<Report>, DataError> {
    let reports =
        sqlx::query_as::<_, Report>(r#"SELECT * FROM reports WHERE "courseId" = ?"#)
            .bind(course_id)
            .fetch_all(pool)
            .await?;

    Ok(reports)
}

/// Lists the reports of a student.
pub async fn for_student(pool: &SqlitePool, student_id: Uuid) -> Result<Vec<Report>, DataError> {
    let reports =
        sqlx::query_as::<_, Report>(r#"SELECT * FROM reports WHERE "studentId" = ?"#)
            .bind(student_id)
            .fetch_all(pool)
            .await?;

    Ok(reports)
}

/// Resolves the report linked to an assessment, if one exists.
pub async fn by_assessment(
    pool: &SqlitePool,
    assessment_id: Uuid,
) -> Result<Option<Report>, DataError> {
    let report =
        sqlx::query_as::<_, Report>(r#"SELECT * FROM reports WHERE "quizAssessmentId" = ?"#)
            .bind(assessment_id)
            .fetch_optional(pool)
            .await?;

    Ok(report)
}

/// Merges a partial update into an existing report. Supplied id lists are
/// re-checked against the stored course.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateReport) -> Result<Report, DataError> {
    changes.validate()?;

    let existing = get(pool, id).await?;
    if let Some(assessment_id) = changes.quiz_assessment_id {
        ensure_exists(pool, "assessments", "assessment", assessment_id).await?;
    }
    ensure_subsets(
        pool,
        existing.course_id,
        changes.total_completed_modules.as_deref().unwrap_or(&[]),
        changes.total_completed_lessons.as_deref().unwrap_or(&[]),
    )
    .await?;

    sqlx::query_as::<_, Report>(
        r#"
        UPDATE reports
        SET "totalCompletedLessons" = COALESCE(?, "totalCompletedLessons"),
            "totalCompletedModules" = COALESCE(?, "totalCompletedModules"),
            completion_date         = COALESCE(?, completion_date),
            "quizAssessmentId"      = COALESCE(?, "quizAssessmentId")
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(changes.total_completed_lessons.map(Json))
    .bind(changes.total_completed_modules.map(Json))
    .bind(changes.completion_date)
    .bind(changes.quiz_assessment_id)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("report {id} not found")))
}

/// Deletes a report.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    let result = sqlx::query("DELETE FROM reports WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::NotFound(format!("report {id} not found")));
    }
    Ok(())
}
