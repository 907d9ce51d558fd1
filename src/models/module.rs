// src/models/module.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::lesson::Lesson;
use super::validate_slug;

/// Represents the 'modules' table in the database.
/// A module is a chapter of exactly one course; `order` defines its display
/// position within that course.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    pub active: bool,

    pub slug: String,

    /// Display position within the course.
    pub order: i64,

    #[sqlx(rename = "courseId")]
    #[serde(rename = "courseId")]
    pub course_id: Uuid,
}

/// DTO for creating a new module. The owning course is fixed at creation.
#[derive(Debug, Deserialize, Validate)]
pub struct NewModule {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub active: Option<bool>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: String,

    pub order: i64,

    pub course_id: Uuid,
}

/// DTO for a partial module update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateModule {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub active: Option<bool>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    pub order: Option<i64>,
}

/// Aggregated module view with its lessons eagerly loaded in display order.
#[derive(Debug, Serialize)]
pub struct ModuleDetail {
    pub module: Module,
    pub lessons: Vec<Lesson>,
}
