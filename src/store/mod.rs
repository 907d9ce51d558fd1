// src/store/mod.rs

pub mod assessments;
pub mod categories;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod modules;
pub mod quizsets;
pub mod quizzes;
pub mod reports;
pub mod testimonials;
pub mod users;
pub mod watches;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DataError;

/// Checks that a referenced row exists before a dependent write.
/// Table names come from the fixed entity set, never from caller input.
pub(crate) async fn ensure_exists(
    pool: &SqlitePool,
    table: &str,
    entity: &str,
    id: Uuid,
) -> Result<(), DataError> {
    let found: bool =
        sqlx::query_scalar(&format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE id = ?)"))
            .bind(id)
            .fetch_one(pool)
            .await?;

    if !found {
        return Err(DataError::NotFound(format!("{entity} {id} does not exist")));
    }
    Ok(())
}

/// Counts live rows referencing `id` through `fk_column`, for the restrict
/// delete policy.
pub(crate) async fn count_dependents(
    pool: &SqlitePool,
    table: &str,
    fk_column: &str,
    id: Uuid,
) -> Result<i64, DataError> {
    let count: i64 = sqlx::query_scalar(&format!(
        r#"SELECT COUNT(*) FROM {table} WHERE "{fk_column}" = ?"#
    ))
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Rejects a delete while dependent rows exist in any of the given tables.
pub(crate) async fn ensure_no_dependents(
    pool: &SqlitePool,
    entity: &str,
    id: Uuid,
    relations: &[(&str, &str)],
) -> Result<(), DataError> {
    for (table, fk_column) in relations {
        let dependents = count_dependents(pool, table, fk_column, id).await?;
        if dependents > 0 {
            return Err(DataError::ReferentialIntegrity(format!(
                "{entity} {id} is still referenced by {dependents} row(s) in {table}"
            )));
        }
    }
    Ok(())
}
