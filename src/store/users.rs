// src/store/users.rs

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::user::{NewUser, UpdateUser, User};

use super::{ensure_exists, ensure_no_dependents};

/// Inserts a new user. Fails with `UniquenessConflict` if the email is taken.
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User, DataError> {
    new_user.validate()?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users
            (id, "firstName", "lastName", password, email, phone, role, bio, "socialMedia", "profilePicture", designation)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.password)
    .bind(&new_user.email)
    .bind(&new_user.phone)
    .bind(new_user.role.unwrap_or_default())
    .bind(&new_user.bio)
    .bind(new_user.social_media.map(Json))
    .bind(&new_user.profile_picture)
    .bind(&new_user.designation)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Fetches a user by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<User, DataError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("user {id} not found")))
}

/// Fetches a user by their unique email.
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<User, DataError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("user with email {email} not found")))
}

/// Merges a partial update into an existing user.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateUser) -> Result<User, DataError> {
    changes.validate()?;

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET "firstName"      = COALESCE(?, "firstName"),
            "lastName"       = COALESCE(?, "lastName"),
            password         = COALESCE(?, password),
            email            = COALESCE(?, email),
            phone            = COALESCE(?, phone),
            role             = COALESCE(?, role),
            bio              = COALESCE(?, bio),
            "socialMedia"    = COALESCE(?, "socialMedia"),
            "profilePicture" = COALESCE(?, "profilePicture"),
            designation      = COALESCE(?, designation)
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.first_name)
    .bind(&changes.last_name)
    .bind(&changes.password)
    .bind(&changes.email)
    .bind(&changes.phone)
    .bind(changes.role)
    .bind(&changes.bio)
    .bind(changes.social_media.map(Json))
    .bind(&changes.profile_picture)
    .bind(&changes.designation)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("user {id} not found")))
}

/// Deletes a user. Blocked while enrollments, reports, testimonials or
/// watches still reference them; courses they taught are detached instead.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "users", "user", id).await?;
    ensure_no_dependents(
        pool,
        "user",
        id,
        &[
            ("enrollments", "studentId"),
            ("reports", "studentId"),
            ("testimonials", "userId"),
            ("watches", "userId"),
        ],
    )
    .await?;

    // courses.instructorId is declared ON DELETE SET NULL
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
