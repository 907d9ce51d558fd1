// src/models/mod.rs

pub mod assessment;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod module;
pub mod quiz;
pub mod quizset;
pub mod report;
pub mod testimonial;
pub mod user;
pub mod watch;

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Validates a URL path slug: lowercase alphanumerics separated by single hyphens.
pub(crate) fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if !SLUG_RE.is_match(slug) {
        return Err(validator::ValidationError::new("invalid_slug"));
    }
    Ok(())
}

/// Validates that a string is a correctly formatted URL.
pub(crate) fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}

/// Limits a free-form JSON payload to roughly 50KB to prevent abuse.
pub(crate) fn validate_payload_size(
    data: &serde_json::Value,
) -> Result<(), validator::ValidationError> {
    if data.to_string().len() > 50000 {
        return Err(validator::ValidationError::new("payload_too_large"));
    }
    Ok(())
}

/// Same cap for free-form JSON lists.
pub(crate) fn validate_payload_list(
    items: &[serde_json::Value],
) -> Result<(), validator::ValidationError> {
    let total: usize = items.iter().map(|item| item.to_string().len()).sum();
    if total > 50000 {
        return Err(validator::ValidationError::new("payload_too_large"));
    }
    Ok(())
}
