use crate::{
    dtos::advisor::AdvisorDashboardResponse, error::status_for, routes::auth::resolve_viewer,
    state::AppState,
};
use advising::advisor::advisor_overview;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use models::ids::AdvisorId;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Get an advisor's dashboard: their advisees and the high-risk subset
#[utoipa::path(
    get,
    path = "/advisors/{id}",
    params(
        ("id" = String, Path, description = "Advisor ID")
    ),
    responses(
        (status = 200, description = "Dashboard assembled", body = AdvisorDashboardResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Caller is not this advisor"),
        (status = 404, description = "Advisor not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Advisors"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(id): Path<String>,
) -> Result<Json<AdvisorDashboardResponse>, StatusCode> {
    let store = state.store.as_ref();
    let viewer = resolve_viewer(store, &claims).await?;

    let overview = advisor_overview(store, &viewer, &AdvisorId::new(id))
        .await
        .map_err(status_for)?;

    Ok(Json(overview.into()))
}
