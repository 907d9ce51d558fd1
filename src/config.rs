// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub admin_email: Option<String>,
    pub admin_password_hash: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://lms.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        // Optional first-boot admin seed. The hash is produced by the access
        // layer; this crate never hashes passwords itself.
        let admin_email = env::var("ADMIN_EMAIL").ok();
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH").ok();

        Self {
            database_url,
            rust_log,
            admin_email,
            admin_password_hash,
        }
    }
}
