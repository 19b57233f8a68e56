mod common;

use advising::{
    ProfileError, Viewer,
    ratings::{RatingSubmission, course_rating_summary, student_course_rating, submit_rating},
};
use common::{Fetch, populated_store};
use models::ids::{AdvisorId, CourseId, StudentId};

fn submission(rating: i64, feedback: Option<&str>) -> RatingSubmission {
    RatingSubmission {
        rating: Some(rating),
        feedback: feedback.map(str::to_owned),
    }
}

#[tokio::test]
async fn test_resubmitting_overwrites_rating() {
    let store = populated_store().with_ratings(Vec::new());
    let viewer = Viewer::Student(StudentId::from(1));
    let course = CourseId::new("MATH 140");

    let first = submit_rating(&store, &viewer, &course, submission(4, Some("tough")))
        .await
        .unwrap();
    let second = submit_rating(&store, &viewer, &course, submission(2, None))
        .await
        .unwrap();

    assert!(first.is_created());
    assert!(!second.is_created());

    let stored = store.stored_ratings();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].rating.get(), 2);
    // Feedback survives a resubmission without feedback
    assert_eq!(stored[0].feedback.as_deref(), Some("tough"));
}

#[tokio::test]
async fn test_invalid_rating_writes_nothing() {
    let store = populated_store().with_ratings(Vec::new());
    let viewer = Viewer::Student(StudentId::from(1));
    let course = CourseId::new("MATH 140");

    let too_high = submit_rating(&store, &viewer, &course, submission(6, None)).await;
    let missing = submit_rating(&store, &viewer, &course, RatingSubmission::default()).await;

    assert!(matches!(too_high, Err(ProfileError::Validation(_))));
    assert!(matches!(missing, Err(ProfileError::Validation(_))));
    assert!(store.stored_ratings().is_empty());
}

#[tokio::test]
async fn test_rating_unknown_course_is_not_found() {
    let store = populated_store();
    let viewer = Viewer::Student(StudentId::from(1));

    let result = submit_rating(&store, &viewer, &CourseId::new("NOPE 000"), submission(3, None)).await;

    assert!(matches!(result, Err(ProfileError::NotFound { entity: "course", .. })));
}

#[tokio::test]
async fn test_rating_by_unknown_student_is_not_found() {
    let store = populated_store().with_ratings(Vec::new());
    let viewer = Viewer::Student(StudentId::from(99));

    let result = submit_rating(&store, &viewer, &CourseId::new("MATH 140"), submission(3, None)).await;

    assert!(matches!(result, Err(ProfileError::NotFound { entity: "student", .. })));
    assert!(store.stored_ratings().is_empty());
}

#[tokio::test]
async fn test_advisors_cannot_rate() {
    let store = populated_store();
    let viewer = Viewer::Faculty(AdvisorId::new("adv01"));

    let result = submit_rating(&store, &viewer, &CourseId::new("MATH 140"), submission(3, None)).await;

    assert!(matches!(result, Err(ProfileError::Forbidden(_))));
}

#[tokio::test]
async fn test_course_rating_summary() {
    let store = populated_store();

    let rated = course_rating_summary(&store, &CourseId::new("CMPSC 131"))
        .await
        .unwrap();
    let unrated = course_rating_summary(&store, &CourseId::new("MATH 140"))
        .await
        .unwrap();

    assert_eq!(rated.average, Some(4.0));
    assert_eq!(rated.count, 2);
    assert_eq!(unrated.average, None);
    assert_eq!(unrated.count, 0);
}

#[tokio::test]
async fn test_summary_surfaces_store_failure() {
    let store = populated_store().fail(Fetch::Ratings);

    let result = course_rating_summary(&store, &CourseId::new("CMPSC 131")).await;

    assert!(matches!(result, Err(ProfileError::Storage(_))));
}

#[tokio::test]
async fn test_student_course_rating() {
    let store = populated_store();
    let course = CourseId::new("CMPSC 131");

    let mine = student_course_rating(&store, &StudentId::from("2"), &course)
        .await
        .unwrap();
    let none = student_course_rating(&store, &StudentId::from(3), &course)
        .await
        .unwrap();

    assert_eq!(mine.map(|r| r.rating.get()), Some(3));
    assert!(none.is_none());
}
