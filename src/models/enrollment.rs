// src/models/enrollment.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Enrollment lifecycle state. Stored as lowercase text in the 'status' column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Represents the 'enrollments' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,

    pub enrollment_date: chrono::DateTime<chrono::Utc>,

    pub status: EnrollmentStatus,

    /// Present once the student finished the course; never earlier than
    /// `enrollment_date`.
    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    /// How the student got in, e.g. 'self-signup' or 'admin-grant'.
    pub method: String,

    #[sqlx(rename = "courseId")]
    #[serde(rename = "courseId")]
    pub course_id: Uuid,

    #[sqlx(rename = "studentId")]
    #[serde(rename = "studentId")]
    pub student_id: Uuid,
}

/// DTO for creating a new enrollment. A supplied `completion_date` must not
/// precede `enrollment_date`; the store rejects the pair otherwise.
#[derive(Debug, Deserialize, Validate)]
pub struct NewEnrollment {
    pub enrollment_date: chrono::DateTime<chrono::Utc>,

    /// Defaults to 'active' when omitted.
    pub status: Option<EnrollmentStatus>,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    #[validate(length(min = 1, max = 50))]
    pub method: String,

    pub course_id: Uuid,
    pub student_id: Uuid,
}

/// DTO for a partial enrollment update. A supplied `completion_date` is
/// checked against the stored `enrollment_date` by the store.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEnrollment {
    pub status: Option<EnrollmentStatus>,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    #[validate(length(min = 1, max = 50))]
    pub method: Option<String>,
}

/// Joined view for a student's dashboard: the enrollment plus the course
/// fields worth showing in a list.
#[derive(Debug, Serialize, FromRow)]
pub struct EnrollmentWithCourse {
    pub id: Uuid,

    pub enrollment_date: chrono::DateTime<chrono::Utc>,

    pub status: EnrollmentStatus,

    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,

    #[sqlx(rename = "courseId")]
    #[serde(rename = "courseId")]
    pub course_id: Uuid,

    pub course_title: String,

    pub course_thumbnail: Option<String>,
}
