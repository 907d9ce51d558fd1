// src/models/testimonial.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the 'testimonials' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,

    pub content: String,

    /// Star rating, 1 to 5.
    pub rating: i64,

    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    #[sqlx(rename = "courseId")]
    #[serde(rename = "courseId")]
    pub course_id: Uuid,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Deserialize, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i64,

    pub user_id: Uuid,
    pub course_id: Uuid,
}

/// DTO for a partial testimonial update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 2000))]
    pub content: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i64>,
}
