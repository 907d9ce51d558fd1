// src/store/lessons.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::lesson::{Lesson, NewLesson, UpdateLesson};

use super::{ensure_exists, ensure_no_dependents};

/// Inserts a new lesson into an existing module.
pub async fn create(pool: &SqlitePool, new_lesson: NewLesson) -> Result<Lesson, DataError> {
    new_lesson.validate()?;
    ensure_exists(pool, "modules", "module", new_lesson.module_id).await?;

    let lesson = sqlx::query_as::<_, Lesson>(
        r#"
        INSERT INTO lessons
            (id, title, description, duration, video_url, active, slug, access, "order", "moduleId")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_lesson.title)
    .bind(&new_lesson.description)
    .bind(new_lesson.duration.unwrap_or(0))
    .bind(&new_lesson.video_url)
    .bind(new_lesson.active.unwrap_or(false))
    .bind(&new_lesson.slug)
    .bind(new_lesson.access.unwrap_or_default())
    .bind(new_lesson.order)
    .bind(new_lesson.module_id)
    .fetch_one(pool)
    .await?;

    Ok(lesson)
}

/// Fetches a lesson by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Lesson, DataError> {
    sqlx::query_as::<_, Lesson>("SELECT * FROM lessons WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("lesson {id} not found")))
}

/// Lists a module's lessons in display order.
pub async fn for_module(pool: &SqlitePool, module_id: Uuid) -> Result<Vec<Lesson>, DataError> {
    let lessons = sqlx::query_as::<_, Lesson>(
        r#"SELECT * FROM lessons WHERE "moduleId" = ? ORDER BY "order" ASC"#,
    )
    .bind(module_id)
    .fetch_all(pool)
    .await?;

    Ok(lessons)
}

/// Merges a partial update into an existing lesson.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateLesson) -> Result<Lesson, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Lesson>(
        r#"
        UPDATE lessons
        SET title       = COALESCE(?, title),
            description = COALESCE(?, description),
            duration    = COALESCE(?, duration),
            video_url   = COALESCE(?, video_url),
            active      = COALESCE(?, active),
            slug        = COALESCE(?, slug),
            access      = COALESCE(?, access),
            "order"     = COALESCE(?, "order")
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(changes.duration)
    .bind(&changes.video_url)
    .bind(changes.active)
    .bind(&changes.slug)
    .bind(changes.access)
    .bind(changes.order)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("lesson {id} not found")))
}

/// Deletes a lesson. Blocked while watches still reference it.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "lessons", "lesson", id).await?;
    ensure_no_dependents(pool, "lesson", id, &[("watches", "lessonId")]).await?;

    sqlx::query("DELETE FROM lessons WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
