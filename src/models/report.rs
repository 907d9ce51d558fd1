// src/models/report.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

/// Represents the 'reports' table in the database.
/// A report tracks one student's progress through one course. The completed
/// id lists are always subsets of the course's own modules and lessons.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,

    /// Ids of lessons the student finished. Stored as a JSON array.
    #[sqlx(rename = "totalCompletedLessons")]
    #[serde(rename = "totalCompletedLessons")]
    pub total_completed_lessons: Json<Vec<Uuid>>,

    /// Ids of modules the student finished. Stored as a JSON array.
    #[sqlx(rename = "totalCompletedModules")]
    #[serde(rename = "totalCompletedModules")]
    pub total_completed_modules: Json<Vec<Uuid>>,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    #[sqlx(rename = "courseId")]
    #[serde(rename = "courseId")]
    pub course_id: Uuid,

    #[sqlx(rename = "studentId")]
    #[serde(rename = "studentId")]
    pub student_id: Uuid,

    /// Link to the quiz assessment, unique across reports. An assessment
    /// may also exist with no report pointing at it.
    #[sqlx(rename = "quizAssessmentId")]
    #[serde(rename = "quizAssessmentId")]
    pub quiz_assessment_id: Option<Uuid>,
}

/// DTO for creating a new report.
#[derive(Debug, Deserialize, Validate)]
pub struct NewReport {
    pub total_completed_lessons: Option<Vec<Uuid>>,
    pub total_completed_modules: Option<Vec<Uuid>>,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    pub course_id: Uuid,
    pub student_id: Uuid,

    pub quiz_assessment_id: Option<Uuid>,
}

/// DTO for a partial report update. Supplied id lists are re-checked against
/// the course content by the store.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateReport {
    pub total_completed_lessons: Option<Vec<Uuid>>,
    pub total_completed_modules: Option<Vec<Uuid>>,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    pub quiz_assessment_id: Option<Uuid>,
}
