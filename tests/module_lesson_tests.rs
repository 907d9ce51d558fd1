// tests/module_lesson_tests.rs

mod common;

use lms_data::error::DataError;
use lms_data::models::lesson::{LessonAccess, NewLesson, UpdateLesson};
use lms_data::models::module::NewModule;
use lms_data::store::{lessons, modules};

#[tokio::test]
async fn module_with_dangling_course_is_not_found() {
    // Arrange
    let pool = common::setup_pool().await;

    // Act
    let result = modules::create(
        &pool,
        NewModule {
            title: "Orphan Module".to_string(),
            description: None,
            active: None,
            slug: "orphan-module".to_string(),
            order: 1,
            course_id: uuid::Uuid::new_v4(),
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[tokio::test]
async fn modules_come_back_in_display_order() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Ordered Course").await;
    common::seed_module(&pool, &course, 2).await;
    common::seed_module(&pool, &course, 1).await;
    common::seed_module(&pool, &course, 3).await;

    // Act
    let listed = modules::for_course(&pool, course.id)
        .await
        .expect("traversal should succeed");

    // Assert
    let orders: Vec<i64> = listed.iter().map(|m| m.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn lesson_defaults_to_private_access_and_zero_duration() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Lesson Defaults").await;
    let module = common::seed_module(&pool, &course, 1).await;

    // Act
    let lesson = lessons::create(
        &pool,
        NewLesson {
            title: "Untimed Lesson".to_string(),
            description: None,
            duration: None,
            video_url: None,
            active: None,
            slug: "untimed-lesson".to_string(),
            access: None,
            order: 1,
            module_id: module.id,
        },
    )
    .await
    .expect("create should succeed");

    // Assert
    assert_eq!(lesson.access, LessonAccess::Private);
    assert_eq!(lesson.duration, 0);
    assert!(!lesson.active);
}

#[tokio::test]
async fn bad_slug_fails_validation() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Slug Course").await;
    let module = common::seed_module(&pool, &course, 1).await;

    // Act: uppercase and spaces are not slug material
    let result = lessons::create(
        &pool,
        NewLesson {
            title: "Bad Slug".to_string(),
            description: None,
            duration: None,
            video_url: None,
            active: None,
            slug: "Not A Slug".to_string(),
            access: None,
            order: 1,
            module_id: module.id,
        },
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DataError::Validation(_))));
}

#[tokio::test]
async fn module_detail_loads_lessons_in_order() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Detail Course").await;
    let module = common::seed_module(&pool, &course, 1).await;
    common::seed_lesson(&pool, &module, 2).await;
    common::seed_lesson(&pool, &module, 1).await;

    // Act
    let detail = modules::get_with_lessons(&pool, module.id)
        .await
        .expect("detail should resolve");

    // Assert
    assert_eq!(detail.module.id, module.id);
    assert_eq!(detail.lessons.len(), 2);
    assert!(detail.lessons[0].order < detail.lessons[1].order);
}

#[tokio::test]
async fn deleting_a_module_with_lessons_is_blocked() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Guarded Module").await;
    let module = common::seed_module(&pool, &course, 1).await;
    let lesson = common::seed_lesson(&pool, &module, 1).await;

    // Act
    let blocked = modules::delete(&pool, module.id).await;

    // Assert
    assert!(matches!(blocked, Err(DataError::ReferentialIntegrity(_))));

    lessons::delete(&pool, lesson.id)
        .await
        .expect("lesson delete should succeed");
    modules::delete(&pool, module.id)
        .await
        .expect("module delete should succeed");
}

#[tokio::test]
async fn lesson_access_can_be_flipped_to_public() {
    // Arrange
    let pool = common::setup_pool().await;
    let course = common::seed_course(&pool, "Preview Course").await;
    let module = common::seed_module(&pool, &course, 1).await;
    let lesson = common::seed_lesson(&pool, &module, 1).await;

    // Act
    let updated = lessons::update(
        &pool,
        lesson.id,
        UpdateLesson {
            access: Some(LessonAccess::Public),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");

    // Assert
    assert_eq!(updated.access, LessonAccess::Public);
    assert_eq!(updated.slug, lesson.slug);
}
