// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::validate_url_string;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,

    /// URL to the category thumbnail image.
    pub thumbnail: String,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub thumbnail: String,
}

/// DTO for a partial category update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub thumbnail: Option<String>,
}
