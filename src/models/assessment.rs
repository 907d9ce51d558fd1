// src/models/assessment.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

use super::validate_payload_list;

/// Represents the 'assessments' table in the database.
/// An assessment collects a student's quiz attempt records. It may exist
/// without any report pointing at it (an unscored attempt), and at most one
/// report may link to it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,

    /// Free-form attempt records, one entry per answered quiz.
    /// Stored as a JSON array in the database.
    pub assessments: Json<Vec<serde_json::Value>>,

    /// Marks awarded outside the quiz engine (manual grading etc.).
    #[sqlx(rename = "otherMarks")]
    #[serde(rename = "otherMarks")]
    pub other_marks: f64,
}

/// DTO for creating a new assessment.
#[derive(Debug, Deserialize, Validate)]
pub struct NewAssessment {
    #[validate(custom(function = validate_payload_list))]
    pub assessments: Option<Vec<serde_json::Value>>,

    /// Defaults to 0 when omitted.
    pub other_marks: Option<f64>,
}

/// DTO for a partial assessment update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAssessment {
    #[validate(custom(function = validate_payload_list))]
    pub assessments: Option<Vec<serde_json::Value>>,

    pub other_marks: Option<f64>,
}
