// src/store/courses.rs

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::DataError;
use crate::models::course::{Course, CourseDetail, NewCourse, UpdateCourse};

use super::{categories, ensure_exists, ensure_no_dependents, modules, quizsets, users};

/// Checks the optional relations of a course payload before a write.
async fn ensure_relations(
    pool: &SqlitePool,
    category_id: Option<Uuid>,
    instructor_id: Option<Uuid>,
    quizset_id: Option<Uuid>,
) -> Result<(), DataError> {
    if let Some(category_id) = category_id {
        ensure_exists(pool, "categories", "category", category_id).await?;
    }
    if let Some(instructor_id) = instructor_id {
        ensure_exists(pool, "users", "user", instructor_id).await?;
    }
    if let Some(quizset_id) = quizset_id {
        ensure_exists(pool, "quizsets", "quizset", quizset_id).await?;
    }
    Ok(())
}

/// Inserts a new course. `createdOn` and `modifiedOn` start out equal.
pub async fn create(pool: &SqlitePool, new_course: NewCourse) -> Result<Course, DataError> {
    new_course.validate()?;
    ensure_relations(
        pool,
        new_course.category_id,
        new_course.instructor_id,
        new_course.quizset_id,
    )
    .await?;

    let now = chrono::Utc::now();

    let course = sqlx::query_as::<_, Course>(
        r#"
        INSERT INTO courses
            (id, title, subtitle, description, thumbnail, price, active, learning,
             "categoryId", "instructorId", "quizsetId", "createdOn", "modifiedOn")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_course.title)
    .bind(&new_course.subtitle)
    .bind(&new_course.description)
    .bind(&new_course.thumbnail)
    .bind(new_course.price.unwrap_or(0.0))
    .bind(new_course.active.unwrap_or(false))
    .bind(Json(new_course.learning.unwrap_or_default()))
    .bind(new_course.category_id)
    .bind(new_course.instructor_id)
    .bind(new_course.quizset_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(course)
}

/// Fetches a course by id.
pub async fn get(pool: &SqlitePool, id: Uuid) -> Result<Course, DataError> {
    sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("course {id} not found")))
}

/// Lists all courses, newest first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Course>, DataError> {
    let courses =
        sqlx::query_as::<_, Course>(r#"SELECT * FROM courses ORDER BY "createdOn" DESC"#)
            .fetch_all(pool)
            .await?;

    Ok(courses)
}

/// Lists the courses filed under a category.
pub async fn by_category(pool: &SqlitePool, category_id: Uuid) -> Result<Vec<Course>, DataError> {
    let courses = sqlx::query_as::<_, Course>(
        r#"SELECT * FROM courses WHERE "categoryId" = ? ORDER BY "createdOn" DESC"#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

/// Lists the courses taught by an instructor.
pub async fn by_instructor(
    pool: &SqlitePool,
    instructor_id: Uuid,
) -> Result<Vec<Course>, DataError> {
    let courses = sqlx::query_as::<_, Course>(
        r#"SELECT * FROM courses WHERE "instructorId" = ? ORDER BY "createdOn" DESC"#,
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

/// Lists the courses a quizset is attached to.
pub async fn by_quizset(pool: &SqlitePool, quizset_id: Uuid) -> Result<Vec<Course>, DataError> {
    let courses = sqlx::query_as::<_, Course>(
        r#"SELECT * FROM courses WHERE "quizsetId" = ? ORDER BY "createdOn" DESC"#,
    )
    .bind(quizset_id)
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

/// Fetches a course with its declared relations eagerly loaded.
pub async fn get_detail(pool: &SqlitePool, id: Uuid) -> Result<CourseDetail, DataError> {
    let course = get(pool, id).await?;

    let category = match course.category_id {
        Some(category_id) => Some(categories::get(pool, category_id).await?),
        None => None,
    };
    let instructor = match course.instructor_id {
        Some(instructor_id) => Some(users::get(pool, instructor_id).await?),
        None => None,
    };
    let quizset = match course.quizset_id {
        Some(quizset_id) => Some(quizsets::get(pool, quizset_id).await?),
        None => None,
    };
    let modules = modules::for_course(pool, id).await?;

    Ok(CourseDetail {
        course,
        category,
        instructor,
        quizset,
        modules,
    })
}

/// Merges a partial update into an existing course and bumps `modifiedOn`.
pub async fn update(pool: &SqlitePool, id: Uuid, changes: UpdateCourse) -> Result<Course, DataError> {
    changes.validate()?;
    ensure_relations(
        pool,
        changes.category_id,
        changes.instructor_id,
        changes.quizset_id,
    )
    .await?;

    sqlx::query_as::<_, Course>(
        r#"
        UPDATE courses
        SET title          = COALESCE(?, title),
            subtitle       = COALESCE(?, subtitle),
            description    = COALESCE(?, description),
            thumbnail      = COALESCE(?, thumbnail),
            price          = COALESCE(?, price),
            active         = COALESCE(?, active),
            learning       = COALESCE(?, learning),
            "categoryId"   = COALESCE(?, "categoryId"),
            "instructorId" = COALESCE(?, "instructorId"),
            "quizsetId"    = COALESCE(?, "quizsetId"),
            "modifiedOn"   = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.subtitle)
    .bind(&changes.description)
    .bind(&changes.thumbnail)
    .bind(changes.price)
    .bind(changes.active)
    .bind(changes.learning.map(Json))
    .bind(changes.category_id)
    .bind(changes.instructor_id)
    .bind(changes.quizset_id)
    .bind(chrono::Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DataError::NotFound(format!("course {id} not found")))
}

/// Deletes a course. Blocked while modules, enrollments, reports or
/// testimonials still reference it.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), DataError> {
    ensure_exists(pool, "courses", "course", id).await?;
    ensure_no_dependents(
        pool,
        "course",
        id,
        &[
            ("modules", "courseId"),
            ("enrollments", "courseId"),
            ("reports", "courseId"),
            ("testimonials", "courseId"),
        ],
    )
    .await?;

    sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
