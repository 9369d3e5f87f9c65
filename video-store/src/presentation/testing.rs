use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::delete, Router};

use super::{error::ApiError, AppState};

/// Routes used by end-to-end test suites to reset server state.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/testing/all-data", delete(clear_all_data))
}

async fn clear_all_data(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.video_service.clear()?;
    Ok(StatusCode::NO_CONTENT)
}
