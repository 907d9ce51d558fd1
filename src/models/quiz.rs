// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

use super::{validate_payload_list, validate_slug};

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    /// Explanation of the correct answer, shown after an attempt.
    pub explanations: Option<String>,

    pub slug: Option<String>,

    /// Answer options in whatever shape the quiz front-end defines.
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<serde_json::Value>>,

    /// Points awarded for a correct answer.
    pub mark: i64,

    #[sqlx(rename = "quizsetId")]
    #[serde(rename = "quizsetId")]
    pub quizset_id: Uuid,
}

/// DTO for creating a new quiz. The owning quizset is fixed at creation.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuiz {
    #[validate(length(min = 1, max = 1000))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 5000))]
    pub explanations: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    #[validate(custom(function = validate_payload_list))]
    pub options: Option<Vec<serde_json::Value>>,

    /// Defaults to 5 when omitted.
    #[validate(range(min = 0))]
    pub mark: Option<i64>,

    pub quizset_id: Uuid,
}

/// DTO for a partial quiz update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuiz {
    #[validate(length(min = 1, max = 1000))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 5000))]
    pub explanations: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    #[validate(custom(function = validate_payload_list))]
    pub options: Option<Vec<serde_json::Value>>,

    #[validate(range(min = 0))]
    pub mark: Option<i64>,
}
