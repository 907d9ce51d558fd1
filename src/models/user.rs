// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{validate_payload_size, validate_url_string};

/// Platform role. Stored as lowercase text in the 'role' column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
    Admin,
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,

    #[sqlx(rename = "firstName")]
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[sqlx(rename = "lastName")]
    #[serde(rename = "lastName")]
    pub last_name: String,

    /// Password hash, produced by the access layer before the write.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Unique login email.
    pub email: String,

    pub phone: Option<String>,

    pub role: UserRole,

    pub bio: Option<String>,

    /// Free-form social links, e.g. {"github": "...", "linkedin": "..."}.
    /// Stored as a JSON object in the database.
    #[sqlx(rename = "socialMedia")]
    #[serde(rename = "socialMedia")]
    pub social_media: Option<sqlx::types::Json<serde_json::Value>>,

    #[sqlx(rename = "profilePicture")]
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,

    /// Displayed title, e.g. "Senior Rust Engineer".
    pub designation: Option<String>,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    /// Already hashed; this crate never sees plaintext credentials.
    #[validate(length(min = 1, max = 255))]
    pub password: String,

    #[validate(email(message = "Invalid email address."))]
    pub email: String,

    #[validate(length(min = 3, max = 30))]
    pub phone: Option<String>,

    /// Defaults to 'student' when omitted.
    pub role: Option<UserRole>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    #[validate(custom(function = validate_payload_size))]
    pub social_media: Option<serde_json::Value>,

    #[validate(custom(function = validate_url_string))]
    pub profile_picture: Option<String>,

    #[validate(length(max = 100))]
    pub designation: Option<String>,
}

/// DTO for a partial user update. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub password: Option<String>,

    #[validate(email(message = "Invalid email address."))]
    pub email: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub phone: Option<String>,

    pub role: Option<UserRole>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    #[validate(custom(function = validate_payload_size))]
    pub social_media: Option<serde_json::Value>,

    #[validate(custom(function = validate_url_string))]
    pub profile_picture: Option<String>,

    #[validate(length(max = 100))]
    pub designation: Option<String>,
}
