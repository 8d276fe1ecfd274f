//! JSON response envelope shared by every handler.
//!
//! ```text
//! {"success": true,  "data": ...}
//! {"success": false, "error": "..."}
//! ```

use serde::{Deserialize, Serialize};

/// Response body wrapper. Exactly one of `data` / `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying a client-facing message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_omits_error() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(body, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_ok_keeps_empty_data() {
        let body = serde_json::to_value(ApiResponse::ok(Vec::<u8>::new())).unwrap();
        assert_eq!(body, json!({"success": true, "data": []}));
    }

    #[test]
    fn test_error_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("Method not allowed")).unwrap();
        assert_eq!(body, json!({"success": false, "error": "Method not allowed"}));
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let parsed: ApiResponse<serde_json::Value> =
            serde_json::from_value(json!({"success": false, "error": "boom"})).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.data, None);
        assert_eq!(parsed.error.as_deref(), Some("boom"));
    }
}
