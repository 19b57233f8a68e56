use advising::ProfileError;
use axum::http::StatusCode;
use log::{error, info};

/// Maps a failed operation to the response status, logging server-side
/// failures
pub fn status_for(err: ProfileError) -> StatusCode {
    let status = match &err {
        ProfileError::NotFound { .. } => StatusCode::NOT_FOUND,
        ProfileError::Forbidden(_) => StatusCode::FORBIDDEN,
        ProfileError::Validation(_) => StatusCode::BAD_REQUEST,
        ProfileError::PartialFetch { .. } | ProfileError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        error!("Request failed: {err}");
    } else {
        info!("Request rejected ({status}): {err}");
    }

    status
}
