// tests/common/mod.rs

#![allow(dead_code)]

use lms_data::db;
use lms_data::models::course::{Course, NewCourse};
use lms_data::models::lesson::{Lesson, NewLesson};
use lms_data::models::module::{Module, NewModule};
use lms_data::models::user::{NewUser, User, UserRole};
use lms_data::store::{courses, lessons, modules, users};
use sqlx::SqlitePool;

/// Fresh in-memory store with the full schema applied.
pub async fn setup_pool() -> SqlitePool {
    db::init_pool("sqlite::memory:")
        .await
        .expect("Failed to initialize in-memory store")
}

pub async fn seed_user(pool: &SqlitePool, email: &str, role: UserRole) -> User {
    users::create(
        pool,
        NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "$argon2id$stub-hash".to_string(),
            email: email.to_string(),
            phone: None,
            role: Some(role),
            bio: None,
            social_media: None,
            profile_picture: None,
            designation: None,
        },
    )
    .await
    .expect("Failed to seed user")
}

pub async fn seed_course(pool: &SqlitePool, title: &str) -> Course {
    courses::create(
        pool,
        NewCourse {
            title: title.to_string(),
            subtitle: None,
            description: "A seeded course for integration tests.".to_string(),
            thumbnail: None,
            price: Some(19.99),
            active: Some(true),
            learning: None,
            category_id: None,
            instructor_id: None,
            quizset_id: None,
        },
    )
    .await
    .expect("Failed to seed course")
}

pub async fn seed_module(pool: &SqlitePool, course: &Course, order: i64) -> Module {
    modules::create(
        pool,
        NewModule {
            title: format!("Module {}", order),
            description: None,
            active: Some(true),
            slug: format!("module-{}", order),
            order,
            course_id: course.id,
        },
    )
    .await
    .expect("Failed to seed module")
}

pub async fn seed_lesson(pool: &SqlitePool, module: &Module, order: i64) -> Lesson {
    lessons::create(
        pool,
        NewLesson {
            title: format!("Lesson {}", order),
            description: None,
            duration: Some(300),
            video_url: None,
            active: Some(true),
            slug: format!("lesson-{}", order),
            access: None,
            order,
            module_id: module.id,
        },
    )
    .await
    .expect("Failed to seed lesson")
}
