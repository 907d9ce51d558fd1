// src/store/modules.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::module::{Module, ModuleDetail, NewModule, UpdateModule};

use super::{ensure_exists, ensure_no_dependents, lessons};

/// Inserts a new module into an existing course.
pub async fn create(pool: &SqlitePool, new_module: NewModule) -> Result<Module, DataError> {
    new_module.validate()?;
    ensure_exists(pool, "courses", "course", new_module.course_id).await?;

    let module = sqlx::query_as::<_, Module>(
        r#"
        INSERT INTO modules (id, title, description, active, slug, "order", "courseId")
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_module.title)
    .bind(&new_module.description)
    .bind(new_module.active.unwrap_or(false))
    .bind(&new_module.slug)
    .bind(new_module.order)
    .bind(new_module.course_id)
    .fetch_one(pool)
    .await?;

    Ok(module)
}

/// Fetches a module by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Module, DataError> {
    sqlx::query_as::<_, Module>("SELECT * FROM modules WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("module {id} not found")))
}

/// Lists a course's modules in display order.
pub async fn for_course(pool: &SqlitePool, course_id: Uuid) -> Result<Vec<Module>, DataError> {
    let modules = sqlx::query_as::<_, Module>(
        r#"SELECT * FROM modules WHERE "courseId" = ? ORDER BY "order" ASC"#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(modules)
}

/// Fetches a module with its lessons eagerly loaded in display order.
pub async fn get_with_lessons(pool: &SqlitePool, id: Uuid) -> Result<ModuleDetail, DataError> {
    let module = get(pool, id).await?;
    let lessons = lessons::for_module(pool, id).await?;

    Ok(ModuleDetail { module, lessons })
}

/// Merges a partial update into an existing module.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateModule) -> Result<Module, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Module>(
        r#"
        UPDATE modules
        SET title       = COALESCE(?, title),
            description = COALESCE(?, description),
            active      = COALESCE(?, active),
            slug        = COALESCE(?, slug),
            "order"     = COALESCE(?, "order")
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(changes.active)
    .bind(&changes.slug)
    .bind(changes.order)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("module {id} not found")))
}

/// Deletes a module. Blocked while lessons or watches still reference it.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "modules", "module", id).await?;
    ensure_no_dependents(
        pool,
        "module",
        id,
        &[("lessons", "moduleId"), ("watches", "moduleId")],
    )
    .await?;

    sqlx::query("DELETE FROM modules WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
