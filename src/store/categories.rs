// src/store/categories.rs

use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::category::{Category, NewCategory, UpdateCategory};

use super::ensure_exists;

/// Inserts a new category.
pub async fn create(pool: &SqlitePool, new_category: NewCategory) -> Result<Category, DataError> {
    new_category.validate()?;

    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (id, title, description, thumbnail)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_category.title)
    .bind(&new_category.description)
    .bind(&new_category.thumbnail)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Fetches a category by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Category, DataError> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("category {id} not found")))
}

/// Lists all categories, alphabetically.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, DataError> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY title ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Merges a partial update into an existing category.
pub async fn update(
    pool: &SqlitePool,
    id: Uuid,
    changes: UpdateCategory,
) -> Result<Category, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET title       = COALESCE(?, title),
            description = COALESCE(?, description),
            thumbnail   = COALESCE(?, thumbnail)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(&changes.thumbnail)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("category {id} not found")))
}

/// Deletes a category. Courses pointing at it are detached, not removed.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "categories", "category", id).await?;

    // courses.categoryId is declared ON DELETE SET NULL
    sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
