// src/models/lesson.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{validate_slug, validate_url_string};

/// Lesson visibility. Stored as lowercase text in the 'access' column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LessonAccess {
    /// Visible to enrolled students only. The default.
    #[default]
    Private,
    /// Free preview, visible to anyone.
    Public,
}

/// Represents the 'lessons' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    /// Playback length in seconds.
    pub duration: i64,

    pub video_url: Option<String>,

    pub active: bool,

    pub slug: String,

    pub access: LessonAccess,

    /// Display position within the module.
    pub order: i64,

    #[sqlx(rename = "moduleId")]
    #[serde(rename = "moduleId")]
    pub module_id: Uuid,
}

/// DTO for creating a new lesson. The owning module is fixed at creation.
#[derive(Debug, Deserialize, Validate)]
pub struct NewLesson {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    /// Defaults to 0 until the media pipeline reports a length.
    #[validate(range(min = 0))]
    pub duration: Option<i64>,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub video_url: Option<String>,

    pub active: Option<bool>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: String,

    /// Defaults to 'private' when omitted.
    pub access: Option<LessonAccess>,

    pub order: i64,

    pub module_id: Uuid,
}

/// DTO for a partial lesson update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLesson {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub duration: Option<i64>,

    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub video_url: Option<String>,

    pub active: Option<bool>,

    #[validate(length(min = 1, max = 200), custom(function = validate_slug))]
    pub slug: Option<String>,

    pub access: Option<LessonAccess>,

    pub order: Option<i64>,
}
