// tests/testimonial_tests.rs

mod common;

use lms_data::error::DataError;
use lms_data::models::testimonial::{NewTestimonial, UpdateTestimonial};
use lms_data::models::user::UserRole;
use lms_data::store::{testimonials, users};

#[tokio::test]
async fn rating_outside_one_to_five_fails_validation() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Rated Course").await;
    let user = common::seed_user(&pool, "rater@example.com", UserRole::Student).await;

    for rating in [0, 6] {
        // Act
        let result = testimonials::create(
            &pool,
            NewTestimonial {
                content: "Out of range.".to_string(),
                rating,
                user_id: user.id,
                course_id: course.id,
            },
        )
        .await;

        // Assert
        assert!(matches!(result, Err(DataError::Validation(_))));
    }
}

#[tokio::test]
async fn testimonial_round_trips_through_course_traversal() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Praised Course").await;
    let user = common::seed_user(&pool, "fan@example.com", UserRole::Student).await;

    // Act
    let created = testimonials::create(
        &pool,
        NewTestimonial {
            content: "Changed how I write Rust.".to_string(),
            rating: 5,
            user_id: user.id,
            course_id: course.id,
        },
    )
    .await
    .expect("create should succeed");
    let listed = testimonials::for_course(&pool, course.id)
        .await
        .expect("traversal should succeed");

    // Assert
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].rating, 5);
}

#[tokio::test]
async fn testimonial_requires_existing_user_and_course() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Lonely Course").await;

    // Act
    let result = testimonials::create(
        &pool,
        NewTestimonial {
            content: "Ghost written.".to_string(),
            rating: 4,
            user_id: uuid::Uuid::new_v4(),
            course_id: course.id,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[tokio::test]
async fn rating_can_be_revised_within_bounds() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Revised Course").await;
    let user = common::seed_user(&pool, "reviser@example.com", UserRole::Student).await;
    let testimonial = testimonials::create(
        &pool,
        NewTestimonial {
            content: "Solid.".to_string(),
            rating: 3,
            user_id: user.id,
            course_id: course.id,
        },
    )
    .await
    .expect("create should succeed");

    // Act
    let updated = testimonials::update(
        &pool,
        testimonial.id,
        UpdateTestimonial {
            rating: Some(4),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");
    let rejected = testimonials::update(
        &pool,
        testimonial.id,
        UpdateTestimonial {
            rating: Some(9),
            ..Default::default()
        },
    )
    .await;

    // Assert
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.content, "Solid.");
    assert!(matches!(rejected, Err(DataError::Validation(_))));
}

#[tokio::test]
async fn deleting_a_user_with_testimonials_is_blocked() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Sticky Praise").await;
    let user = common::seed_user(&pool, "stuck@example.com", UserRole::Student).await;
    let testimonial = testimonials::create(
        &pool,
        NewTestimonial {
            content: "Here to stay.".to_string(),
            rating: 5,
            user_id: user.id,
            course_id: course.id,
        },
    )
    .await
    .expect("create should succeed");

    // Act
    let blocked = users::delete(&pool, user.id).await;

    // Assert
    assert!(matches!(blocked, Err(DataError::ReferentialIntegrity(_))));

    testimonials::delete(&pool, testimonial.id)
        .await
        .expect("testimonial delete should succeed");
    users::delete(&pool, user.id)
        .await
        .expect("user delete should succeed");
}
