// src/main.rs

use dotenvy::dotenv;
use lms_data::config::Config;
use lms_data::db;
use lms_data::error::DataError;
use lms_data::models::user::{NewUser, UserRole};
use lms_data::store::users;
use sqlx::SqlitePool;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Open the store and apply migrations
    let pool = match db::init_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to initialize the store: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Store ready at {}", config.database_url);

    // Seed Admin User
    if let Err(e) = seed_admin_user(&pool, &config).await {
        tracing::error!("Failed to seed admin user: {:?}", e);
    }
}

/// Creates the admin account on first boot when seed credentials are
/// configured. The password arrives pre-hashed; hashing lives in the access
/// layer, not here.
async fn seed_admin_user(
    pool: &SqlitePool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if let (Some(email), Some(password_hash)) =
        (&config.admin_email, &config.admin_password_hash)
    {
        match users::get_by_email(pool, email).await {
            Ok(_) => return Ok(()),
            Err(DataError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        tracing::info!("Seeding admin user: {}", email);
        users::create(
            pool,
            NewUser {
                first_name: "Platform".to_string(),
                last_name: "Admin".to_string(),
                password: password_hash.clone(),
                email: email.clone(),
                phone: None,
                role: Some(UserRole::Admin),
                bio: None,
                social_media: None,
                profile_picture: None,
                designation: None,
            },
        )
        .await?;
        tracing::info!("Admin user created successfully.");
    }
    Ok(())
}
