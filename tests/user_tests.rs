// tests/user_tests.rs

mod common;

use lms_data::error::DataError;
use lms_data::models::user::{NewUser, UpdateUser, UserRole};
use lms_data::store::{courses, users};

#[tokio::test]
async fn create_and_read_back_by_email() {
    // Arrange
    let pool = common::setup_pool().await;

    // Act
    let created = common::seed_user(&pool, "ada@example.com", UserRole::Student).await;
    let fetched = users::get_by_email(&pool, "ada@example.com")
        .await
        .expect("user should resolve by email");

    // Assert
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, "ada@example.com");
    assert_eq!(fetched.role, UserRole::Student);
    assert_eq!(fetched.phone, None);
}

#[tokio::test]
async fn duplicate_email_is_a_uniqueness_conflict() {
    // Arrange
    let pool = common::setup_pool().await;
    common::seed_user(&pool, "dup@example.com", UserRole::Student).await;

    // Act
    let result = users::create(
        &pool,
        NewUser {
            first_name: "Second".to_string(),
            last_name: "User".to_string(),
            password: "$argon2id$stub-hash".to_string(),
            email: "dup@example.com".to_string(),
            phone: None,
            role: None,
            bio: None,
            social_media: None,
            profile_picture: None,
            designation: None,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::UniquenessConflict(_))));
}

#[tokio::test]
async fn malformed_email_fails_validation() {
    // Arrange
    let pool = common::setup_pool().await;

    // Act
    let result = users::create(
        &pool,
        NewUser {
            first_name: "Bad".to_string(),
            last_name: "Email".to_string(),
            password: "$argon2id$stub-hash".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            role: None,
            bio: None,
            social_media: None,
            profile_picture: None,
            designation: None,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::Validation(_))));
}

#[tokio::test]
async fn role_defaults_to_student_and_social_media_round_trips() {
    // Arrange
    let pool = common::setup_pool().await;
    let links = serde_json::json!({"github": "https://github.com/ada"});

    // Act
    let created = users::create(
        &pool,
        NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "$argon2id$stub-hash".to_string(),
            email: "social@example.com".to_string(),
            phone: None,
            role: None,
            bio: Some("First programmer.".to_string()),
            social_media: Some(links.clone()),
            profile_picture: None,
            designation: Some("Engineer".to_string()),
        },
    )
    .await
    .expect("create should succeed");

    // Assert
    assert_eq!(created.role, UserRole::Student);
    assert_eq!(created.social_media.map(|json| json.0), Some(links));
}

#[tokio::test]
async fn partial_update_leaves_other_fields_untouched() {
    // Arrange
    let pool = common::setup_pool().await;
    let user = common::seed_user(&pool, "update@example.com", UserRole::Student).await;

    // Act
    let updated = users::update(
        &pool,
        user.id,
        UpdateUser {
            bio: Some("Now teaching.".to_string()),
            role: Some(UserRole::Instructor),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");

    // Assert
    assert_eq!(updated.bio.as_deref(), Some("Now teaching."));
    assert_eq!(updated.role, UserRole::Instructor);
    assert_eq!(updated.first_name, user.first_name);
    assert_eq!(updated.email, user.email);
}

#[tokio::test]
async fn missing_user_is_not_found() {
    // Arrange
    let pool = common::setup_pool().await;

    // Act
    let result = users::get(&pool, uuid::Uuid::new_v4()).await;

    // Assert
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[tokio::test]
async fn deleting_an_instructor_detaches_their_courses() {
    // Arrange
    let pool = common::setup_pool().await;
    let instructor = common::seed_user(&pool, "teach@example.com", UserRole::Instructor).await;
    let course = courses::create(
        &pool,
        lms_data::models::course::NewCourse {
            title: "Taught Course".to_string(),
            subtitle: None,
            description: "Course with an instructor.".to_string(),
            thumbnail: None,
            price: None,
            active: None,
            learning: None,
            category_id: None,
            instructor_id: Some(instructor.id),
            quizset_id: None,
        },
    )
    .await
    .expect("create should succeed");
    assert_eq!(course.instructor_id, Some(instructor.id));

    // Act
    users::delete(&pool, instructor.id)
        .await
        .expect("delete should succeed");

    // Assert
    let detached = courses::get(&pool, course.id)
        .await
        .expect("course should survive");
    assert_eq!(detached.instructor_id, None);
}
