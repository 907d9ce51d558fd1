// src/store/testimonials.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::testimonial::{NewTestimonial, Testimonial, UpdateTestimonial};

use super::ensure_exists;

/// Inserts a new testimonial from an existing user on an existing course.
pub async fn create(
    pool: &SqlitePool,
    new_testimonial: NewTestimonial,
) -> Result<Testimonial, DataError> {
    new_testimonial.validate()?;
    ensure_exists(pool, "users", "user", new_testimonial.user_id).await?;
    ensure_exists(pool, "courses", "course", new_testimonial.course_id).await?;

    let testimonial = sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (id, content, rating, "userId", "courseId")
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_testimonial.content)
    .bind(new_testimonial.rating)
    .bind(new_testimonial.user_id)
    .bind(new_testimonial.course_id)
    .fetch_one(pool)
    .await?;

    Ok(testimonial)
}

/// Fetches a testimonial by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Testimonial, DataError> {
    sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("testimonial {id} not found")))
}

/// Lists the testimonials left on a course.
pub async fn for_course(pool: &SqlitePool, course_id: Uuid) -> Result<Vec<Testimonial>, DataError> {
    let testimonials =
        sqlx::query_as::<_, Testimonial>(r#"SELECT * FROM testimonials WHERE "courseId" = ?"#)
            .bind(course_id)
            .fetch_all(pool)
            .await?;

    Ok(testimonials)
}

/// Lists the testimonials a user has written.
pub async fn for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Testimonial>, DataError> {
    let testimonials =
        sqlx::query_as::<_, Testimonial>(r#"SELECT * FROM testimonials WHERE "userId" = ?"#)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    Ok(testimonials)
}

/// Merges a partial update into an existing testimonial.
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    changes: UpdateTestimonial,
) -> Result<Testimonial, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Testimonial>(
        r#"
        UPDATE testimonials
        SET content = COALESCE(?, content),
            rating  = COALESCE(?, rating)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.content)
    .bind(changes.rating)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("testimonial {id} not found")))
}

/// Deletes a testimonial.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    let result = sqlx::query("DELETE FROM testimonials WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::NotFound(format!("testimonial {id} not found")));
    }
    Ok(())
}
