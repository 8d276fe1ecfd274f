//! Fixed CORS headers for the function endpoints.
//!
//! Every response from a function route carries the same three headers,
//! whatever its status. Browsers send an `OPTIONS` preflight first; it is
//! answered with `200` and an empty body.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Request headers a browser may send to the functions.
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Methods the functions accept.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Add CORS headers to all function responses.
///
/// Headers applied:
/// - `Access-Control-Allow-Origin` - from `ALLOWED_ORIGIN` (default `*`)
/// - `Access-Control-Allow-Headers: Content-Type`
/// - `Access-Control-Allow-Methods: GET, POST, OPTIONS`
pub async fn cors_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        state.config().allowed_origin.clone(),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );

    response
}

/// Answer a CORS preflight. Empty body; headers come from the middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for methods a function does not handle.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
