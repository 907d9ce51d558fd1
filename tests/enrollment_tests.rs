// tests/enrollment_tests.rs

mod common;

use chrono::{Duration, Utc};
use lms_data::error::DataError;
use lms_data::models::enrollment::{EnrollmentStatus, NewEnrollment, UpdateEnrollment};
use lms_data::models::user::UserRole;
use lms_data::store::enrollments;

#[tokio::test]
async fn enrollment_lifecycle_from_active_to_completed() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Lifecycle Course").await;
    let student = common::seed_user(&pool, "student@example.com", UserRole::Student).await;
    let t0 = Utc::now();

    // Act: enroll
    let enrollment = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: t0,
            status: Some(EnrollmentStatus::Active),
            completion_date: None,
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await
    .expect("create should succeed");

    // Assert: fresh enrollment has no completion date
    let fetched = enrollments::get(&pool, enrollment.id)
        .await
        .expect("enrollment should resolve by id");
    assert_eq!(fetched.status, EnrollmentStatus::Active);
    assert!(fetched.completion_date.is_none());
    assert_eq!(fetched.method, "self-signup");

    // Act: complete one month later
    let t1 = t0 + Duration::days(30);
    let completed = enrollments::update(
        &pool,
        enrollment.id,
        UpdateEnrollment {
            status: Some(EnrollmentStatus::Completed),
            completion_date: Some(t1),
            method: None,
        },
    )
    .await
    .expect("update should succeed");

    // Assert
    assert_eq!(completed.status, EnrollmentStatus::Completed);
    assert!(completed.completion_date.expect("set") >= completed.enrollment_date);
}

#[tokio::test]
async fn completion_before_enrollment_is_rejected_at_create() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Backdated Course").await;
    let student = common::seed_user(&pool, "backdate@example.com", UserRole::Student).await;
    let t0 = Utc::now();

    // Act
    let result = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: t0,
            status: None,
            completion_date: Some(t0 - Duration::days(1)),
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::Validation(_))));
}

#[tokio::test]
async fn completion_before_enrollment_is_rejected_at_update() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Strict Course").await;
    let student = common::seed_user(&pool, "strict@example.com", UserRole::Student).await;
    let t0 = Utc::now();
    let enrollment = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: t0,
            status: None,
            completion_date: None,
            method: "admin-grant".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await
    .expect("create should succeed");

    // Act
    let result = enrollments::update(
        &pool,
        enrollment.id,
        UpdateEnrollment {
            status: Some(EnrollmentStatus::Completed),
            completion_date: Some(t0 - Duration::hours(1)),
            method: None,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::Validation(_))));
}

#[tokio::test]
async fn enrollment_requires_existing_course_and_student() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Half Real Course").await;

    // Act: real course, missing student
    let result = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: Utc::now(),
            status: None,
            completion_date: None,
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: uuid::Uuid::new_v4(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[tokio::test]
async fn status_defaults_to_active() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Default Status Course").await;
    let student = common::seed_user(&pool, "default@example.com", UserRole::Student).await;

    // Act
    let enrollment = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: Utc::now(),
            status: None,
            completion_date: None,
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await
    .expect("create should succeed");

    // Assert
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
}

#[tokio::test]
async fn student_dashboard_join_carries_course_fields() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Dashboard Course").await;
    let student = common::seed_user(&pool, "dash@example.com", UserRole::Student).await;
    enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: Utc::now(),
            status: None,
            completion_date: None,
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await
    .expect("create should succeed");

    // Act
    let rows = enrollments::for_student_detailed(&pool, student.id)
        .await
        .expect("join should succeed");

    // Assert
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course_id, course.id);
    assert_eq!(rows[0].course_title, "Dashboard Course");
}

#[tokio::test]
async fn deleting_an_enrolled_student_is_blocked() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Sticky Course").await;
    let student = common::seed_user(&pool, "sticky@example.com", UserRole::Student).await;
    let enrollment = enrollments::create(
        &pool,
        NewEnrollment {
            enrollment_date: Utc::now(),
            status: None,
            completion_date: None,
            method: "self-signup".to_string(),
            course_id: course.id,
            student_id: student.id,
        },
    )
    .await
    .expect("create should succeed");

    // Act
    let blocked = lms_data::store::users::delete(&pool, student.id).await;

    // Assert
    assert!(matches!(blocked, Err(DataError::ReferentialIntegrity(_))));

    enrollments::delete(&pool, enrollment.id)
        .await
        .expect("enrollment delete should succeed");
    lms_data::store::users::delete(&pool, student.id)
        .await
        .expect("user delete should succeed");
}
