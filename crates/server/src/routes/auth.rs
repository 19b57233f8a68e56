use crate::{dtos::profile::view_mode_name, state::AppState};
use advising::{RecordStore, Viewer};
use axum::{Extension, Json, extract::State, http::StatusCode};
use log::error;
use models::ids::{AdvisorId, StudentId};
use serde::Serialize;
use tower_oauth2_resource_server::claims::DefaultClaims;
use utoipa::ToSchema;

/// Resolves the caller from the JWT subject. A subject naming an advisor is
/// faculty; anything else is treated as a student id.
pub async fn resolve_viewer(
    store: &dyn RecordStore,
    claims: &DefaultClaims,
) -> Result<Viewer, StatusCode> {
    let sub = claims
        .sub
        .as_deref()
        .map(str::trim)
        .filter(|sub| !sub.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let advisor_id = AdvisorId::new(sub);
    match store.find_advisor(&advisor_id).await {
        Ok(Some(_)) => Ok(Viewer::Faculty(advisor_id)),
        Ok(None) => Ok(Viewer::Student(StudentId::new(sub))),
        Err(err) => {
            error!("Failed to resolve caller {sub}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WhoAmIResponse {
    pub id: String,
    /// "student" or "faculty"
    pub role: String,
}

/// Returns the caller's id and the role derived from their JWT subject
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Successfully authenticated", body = WhoAmIResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
) -> Result<Json<WhoAmIResponse>, StatusCode> {
    let viewer = resolve_viewer(state.store.as_ref(), &claims).await?;

    let id = match &viewer {
        Viewer::Student(id) => id.to_string(),
        Viewer::Faculty(id) => id.to_string(),
    };

    Ok(Json(WhoAmIResponse {
        id,
        role: view_mode_name(viewer.mode()).to_owned(),
    }))
}
