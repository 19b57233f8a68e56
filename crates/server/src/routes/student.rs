use crate::{dtos::profile::ProfileResponse, error::status_for, routes::auth::resolve_viewer, state::AppState};
use advising::assemble::assemble_profile;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use models::ids::StudentId;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Get the academic profile of a student
///
/// Students may open their own profile only; advisors may open the profiles
/// of their advisees. Sections that fail to load are returned empty and
/// listed under `degraded`.
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Profile assembled", body = ProfileResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Caller may not view this student"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Students"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let store = state.store.as_ref();
    let viewer = resolve_viewer(store, &claims).await?;

    let profile = assemble_profile(store, &viewer, &StudentId::new(id))
        .await
        .map_err(status_for)?;

    Ok(Json(profile.into()))
}
