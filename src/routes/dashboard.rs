//! Dashboard route: per-user overview for the member portal.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::auth::CurrentUser;
use crate::services::dashboard::DashboardPayload;
use crate::AppState;

/// GET /api/dashboard — profile, news, events and membership for the caller.
pub async fn overview(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<DashboardPayload>, AppError> {
    let payload = state.dashboard().build(current_user.id).await?;
    Ok(Json(payload))
}
