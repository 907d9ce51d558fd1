// src/models/quizset.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::validate_slug;

/// Represents the 'quizsets' table in the database.
/// A quizset groups quizzes and can be attached to any number of courses.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quizset {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub active: bool,
}

/// DTO for creating a new quizset.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuizset {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    pub active: Option<bool>,
}

/// DTO for a partial quizset update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuizset {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    pub active: Option<bool>,
}
