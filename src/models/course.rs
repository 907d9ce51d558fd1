// src/models/course.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

use super::category::Category;
use super::module::Module;
use super::quizset::Quizset;
use super::user::User;
use super::validate_url_string;

/// Represents the 'courses' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,

    pub title: String,

    pub subtitle: Option<String>,

    pub description: String,

    /// URL to the course thumbnail image.
    pub thumbnail: Option<String>,

    /// Non-negative price; 0 marks a free course.
    pub price: f64,

    /// Inactive courses are kept but hidden from catalogs by the access layer.
    pub active: bool,

    /// Ordered list of learning outcomes shown on the course page.
    /// Stored as a JSON array in the database.
    pub learning: Json<Vec<String>>,

    #[sqlx(rename = "categoryId")]
    #[serde(rename = "categoryId")]
    pub category_id: Option<Uuid>,

    /// The instructor teaching the course.
    #[sqlx(rename = "instructorId")]
    #[serde(rename = "instructorId")]
    pub instructor_id: Option<Uuid>,

    /// The quizset attached to the course, if any.
    #[sqlx(rename = "quizsetId")]
    #[serde(rename = "quizsetId")]
    pub quizset_id: Option<Uuid>,

    /// Set once at creation, never by the caller.
    #[sqlx(rename = "createdOn")]
    #[serde(rename = "createdOn")]
    pub created_on: chrono::DateTime<chrono::Utc>,

    /// Recomputed on every write, never by the caller.
    #[sqlx(rename = "modifiedOn")]
    #[serde(rename = "modifiedOn")]
    pub modified_on: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new course.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 300))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, max = 20000))]
    pub description: String,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub thumbnail: Option<String>,

    /// Defaults to 0 (free) when omitted.
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    /// Defaults to false when omitted.
    pub active: Option<bool>,

    #[validate(custom(function = validate_learning_items))]
    pub learning: Option<Vec<String>>,

    pub category_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub quizset_id: Option<Uuid>,
}

/// DTO for a partial course update. `modifiedOn` is recomputed as a side
/// effect of every update and cannot be supplied here.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 300))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, max = 20000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub thumbnail: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    pub active: Option<bool>,

    #[validate(custom(function = validate_learning_items))]
    pub learning: Option<Vec<String>>,

    pub category_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub quizset_id: Option<Uuid>,
}

/// Aggregated course view with declared relations eagerly loaded.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub category: Option<Category>,
    pub instructor: Option<User>,
    pub quizset: Option<Quizset>,
    pub modules: Vec<Module>,
}

/// Validates learning outcome entries, ensuring each is non-empty and short.
fn validate_learning_items(items: &[String]) -> Result<(), validator::ValidationError> {
    for item in items {
        if item.is_empty() {
            return Err(validator::ValidationError::new("learning_item_empty"));
        }
        if item.len() > 500 {
            return Err(validator::ValidationError::new("learning_item_too_long"));
        }
    }
    Ok(())
}
