//! `get-active-services` function.

use axum::{Json, extract::State};

use catalog_core::{ApiResponse, Service};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List active services ordered by `sort_order`.
///
/// Rows are returned exactly as stored. An empty catalog is a successful
/// response with `data: []`.
///
/// # Errors
///
/// Returns `AppError::Services` if the database query fails.
#[tracing::instrument(skip(state))]
pub async fn get_active_services(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Service>>>> {
    let services = state
        .services()
        .list_active()
        .await
        .map_err(AppError::Services)?;

    tracing::debug!(count = services.len(), "Fetched active services");
    Ok(Json(ApiResponse::ok(services)))
}
