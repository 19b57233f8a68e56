use crate::{
    dtos::rating::{RatingRequest, RatingResponse, RatingSummaryResponse},
    error::status_for,
    routes::auth::resolve_viewer,
    state::AppState,
};
use advising::{
    ProfileError, Viewer,
    ratings::{course_rating_summary, student_course_rating, submit_rating},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use models::ids::CourseId;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Submit or update the caller's rating of a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/ratings",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    request_body = RatingRequest,
    responses(
        (status = 201, description = "Rating created", body = RatingResponse),
        (status = 200, description = "Existing rating updated", body = RatingResponse),
        (status = 400, description = "Rating missing or outside 1 to 5"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Only students can rate courses"),
        (status = 404, description = "Student or course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Ratings"
)]
pub async fn post_rating(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(course_id): Path<String>,
    Json(request): Json<RatingRequest>,
) -> Result<(StatusCode, Json<RatingResponse>), StatusCode> {
    let store = state.store.as_ref();
    let viewer = resolve_viewer(store, &claims).await?;

    let outcome = submit_rating(store, &viewer, &CourseId::new(course_id), request.into())
        .await
        .map_err(status_for)?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(outcome.into_rating().into())))
}

/// Get the average rating and rating count of a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/ratings",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Rating summary", body = RatingSummaryResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Ratings"
)]
pub async fn get_rating_summary(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<RatingSummaryResponse>, StatusCode> {
    let summary = course_rating_summary(state.store.as_ref(), &CourseId::new(course_id))
        .await
        .map_err(status_for)?;

    Ok(Json(summary.into()))
}

/// Get the caller's own rating of a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/ratings/me",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The caller's rating", body = RatingResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Only students have ratings"),
        (status = 404, description = "The caller has not rated this course"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Ratings"
)]
pub async fn get_my_rating(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(course_id): Path<String>,
) -> Result<Json<RatingResponse>, StatusCode> {
    let store = state.store.as_ref();
    let Viewer::Student(student_id) = resolve_viewer(store, &claims).await? else {
        return Err(status_for(ProfileError::forbidden("only students have ratings")));
    };

    let course_id = CourseId::new(course_id);
    let rating = student_course_rating(store, &student_id, &course_id)
        .await
        .map_err(status_for)?
        .ok_or_else(|| status_for(ProfileError::not_found("rating", &course_id)))?;

    Ok(Json(rating.into()))
}
