// src/store/enrollments.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::enrollment::{
    Enrollment, EnrollmentWithCourse, NewEnrollment, UpdateEnrollment,
};

use super::ensure_exists;

/// Inserts a new enrollment of an existing student into an existing course.
pub async fn create(
    pool: &SqlitePool,
    new_enrollment: NewEnrollment,
) -> Result<Enrollment, DataError> {
    new_enrollment.validate()?;
    if let Some(completion_date) = new_enrollment.completion_date {
        if completion_date < new_enrollment.enrollment_date {
            return Err(DataError::Validation(format!(
                "completion_date {completion_date} precedes enrollment_date {}",
                new_enrollment.enrollment_date
            )));
        }
    }
    ensure_exists(pool, "courses", "course", new_enrollment.course_id).await?;
    ensure_exists(pool, "users", "student", new_enrollment.student_id).await?;

    let enrollment = sqlx::query_as::<_, Enrollment>(
        r#"
        INSERT INTO enrollments
            (id, enrollment_date, status, completion_date, method, "courseId", "studentId")
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_enrollment.enrollment_date)
    .bind(new_enrollment.status.unwrap_or_default())
    .bind(new_enrollment.completion_date)
    .bind(&new_enrollment.method)
    .bind(new_enrollment.course_id)
    .bind(new_enrollment.student_id)
    .fetch_one(pool)
    .await?;

    Ok(enrollment)
}

/// Fetches an enrollment by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Enrollment, DataError> {
    sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("enrollment {id} not found")))
}

/// Lists the enrollments of a course.
pub async fn for_course(pool: &SqlitePool, course_id: Uuid) -> Result<Vec<Enrollment>, DataError> {
    let enrollments = sqlx::query_as::<_, Enrollment>(
        r#"SELECT * FROM enrollments WHERE "courseId" = ? ORDER BY enrollment_date DESC"#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(enrollments)
}

/// Lists the enrollments of a student.
pub async fn for_student(pool: &SqlitePool, student_id: Uuid) -> Result<Vec<Enrollment>, DataError> {
    let enrollments = sqlx::query_as::<_, Enrollment>(
        r#"SELECT * FROM enrollments WHERE "studentId" = ? ORDER BY enrollment_date DESC"#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(enrollments)
}

/// Lists a student's enrollments joined with the course fields a dashboard
/// shows.
pub async fn for_student_detailed(
    pool: &SqlitePool,
    student_id: Uuid,
) -> Result<Vec<EnrollmentWithCourse>, DataError> {
    let rows = sqlx::query_as::<_, EnrollmentWithCourse>(
        r#"
        SELECT
            e.id,
            e.enrollment_date,
            e.status,
            e.completion_date,
            e."courseId",
            c.title AS course_title,
            c.thumbnail AS course_thumbnail
        FROM enrollments e
        JOIN courses c ON e."courseId" = c.id
        WHERE e."studentId" = ?
        ORDER BY e.enrollment_date DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Merges a partial update into an existing enrollment. A supplied
/// completion date must not precede the stored enrollment date.
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    changes: UpdateEnrollment,
) -> Result<Enrollment, DataError> {
    changes.validate()?;

    let existing = get(pool, id).await?;
    if let Some(completion_date) = changes.completion_date {
        if completion_date < existing.enrollment_date {
            return Err(DataError::Validation(format!(
                "completion_date {completion_date} precedes enrollment_date {}",
                existing.enrollment_date
            )));
        }
    }

    sqlx::query_as::<_, Enrollment>(
        r#"
        UPDATE enrollments
        SET status          = COALESCE(?, status),
            completion_date = COALESCE(?, completion_date),
            method          = COALESCE(?, method)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(changes.status)
    .bind(changes.completion_date)
    .bind(&changes.method)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("enrollment {id} not found")))
}

/// Deletes an enrollment.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    let result = sqlx::query("DELETE FROM enrollments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::NotFound(format!("enrollment {id} not found")));
    }
    Ok(())
}
