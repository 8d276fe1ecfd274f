//! `get-stripe-key` function.
//!
//! Hands the Stripe publishable key to the browser so checkout can be
//! initialized client-side. The secret key never passes through here.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use catalog_core::ApiResponse;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Payload of a successful `get-stripe-key` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeKey {
    pub publishable_key: String,
}

/// Return the configured Stripe publishable key.
///
/// # Errors
///
/// Returns `AppError::StripeKeyMissing` if `STRIPE_PUBLISHABLE_KEY` is unset.
pub async fn get_stripe_key(State(state): State<AppState>) -> Result<Json<ApiResponse<StripeKey>>> {
    let publishable_key = state
        .config()
        .stripe_publishable_key
        .clone()
        .ok_or(AppError::StripeKeyMissing)?;

    Ok(Json(ApiResponse::ok(StripeKey { publishable_key })))
}
