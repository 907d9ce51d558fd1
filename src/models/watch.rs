// src/models/watch.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Playback progress state. Stored as lowercase text in the 'state' column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WatchState {
    #[default]
    Started,
    Completed,
    Paused,
}

/// Represents the 'watches' table in the database.
/// One row per viewing of a lesson by a user; the module reference is kept
/// denormalized so per-module progress reads stay single-table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Watch {
    pub id: Uuid,

    pub state: WatchState,

    /// Set once at creation, never by the caller.
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Recomputed on every write, never by the caller.
    pub modified_at: chrono::DateTime<chrono::Utc>,

    /// Last playback position in seconds.
    #[sqlx(rename = "lastTime")]
    #[serde(rename = "lastTime")]
    pub last_time: i64,

    #[sqlx(rename = "lessonId")]
    #[serde(rename = "lessonId")]
    pub lesson_id: Uuid,

    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    #[sqlx(rename = "moduleId")]
    #[serde(rename = "moduleId")]
    pub module_id: Uuid,
}

/// DTO for creating a new watch record.
#[derive(Debug, Deserialize, Validate)]
pub struct NewWatch {
    /// Defaults to 'started' when omitted.
    pub state: Option<WatchState>,

    /// Defaults to 0 when omitted.
    #[validate(range(min = 0))]
    pub last_time: Option<i64>,

    pub lesson_id: Uuid,
    pub user_id: Uuid,
    pub module_id: Uuid,
}

/// DTO for a partial watch update. `modified_at` is recomputed as a side
/// effect of every update and cannot be supplied here.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateWatch {
    pub state: Option<WatchState>,

    #[validate(range(min = 0))]
    pub last_time: Option<i64>,
}
