//! Response envelope
//!
//! The upstream API wraps every payload as `{success, data?, message?}`.
//! `ApiResponse<T>` is the typed form callers branch on.

use crate::config::DEFAULT_FAILURE_MESSAGE;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome of a single API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Failure { message: String },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            data,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        ApiResponse::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { message, .. } => message.as_deref(),
            ApiResponse::Failure { message } => Some(message),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Transform the payload, keeping the message
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResponse::Success { data, message } => ApiResponse::Success {
                data: f(data),
                message,
            },
            ApiResponse::Failure { message } => ApiResponse::Failure { message },
        }
    }

    /// Payload on success, failure message otherwise
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure { message } => Err(message),
        }
    }

    /// Failure message, or the given fallback for a successful response
    pub fn failure_message_or(&self, fallback: &str) -> String {
        match self {
            ApiResponse::Failure { message } => message.clone(),
            ApiResponse::Success { .. } => fallback.to_string(),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Unwrap a parsed response body.
    ///
    /// Only a 2xx status with `success: true` yields `Success`; everything else
    /// becomes `Failure` carrying the upstream message when one is present.
    pub fn from_body(status_ok: bool, body: Value) -> Self {
        // Fields are read one by one so a mistyped field never hides the others
        let success = body.get("success").and_then(Value::as_bool) == Some(true);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        if status_ok && success {
            let data = body.get("data").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<T>(data) {
                Ok(data) => ApiResponse::Success { data, message },
                Err(e) => ApiResponse::failure(format!("Malformed response data: {}", e)),
            }
        } else {
            ApiResponse::failure(message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_unwraps_data() {
        let resp: ApiResponse<Vec<String>> = ApiResponse::from_body(
            true,
            json!({"success": true, "data": ["a", "b"], "message": "ok"}),
        );
        assert_eq!(
            resp,
            ApiResponse::Success {
                data: vec!["a".to_string(), "b".to_string()],
                message: Some("ok".to_string()),
            }
        );
    }

    #[test]
    fn test_business_failure_passes_message_through() {
        let resp: ApiResponse<Value> = ApiResponse::from_body(
            true,
            json!({"success": false, "message": "Invalid credentials"}),
        );
        assert_eq!(resp.message(), Some("Invalid credentials"));
        assert!(!resp.is_success());
    }

    #[test]
    fn test_non_ok_status_is_failure_even_when_flag_set() {
        let resp: ApiResponse<Value> =
            ApiResponse::from_body(false, json!({"success": true, "data": {}}));
        assert_eq!(resp.message(), Some("Request failed"));
    }

    #[test]
    fn test_missing_message_defaults() {
        let resp: ApiResponse<Value> = ApiResponse::from_body(false, json!({}));
        assert_eq!(resp.message(), Some("Request failed"));

        let resp: ApiResponse<Value> = ApiResponse::from_body(true, json!("not an object"));
        assert_eq!(resp.message(), Some("Request failed"));
    }

    #[test]
    fn test_mistyped_message_keeps_success_flag() {
        let resp: ApiResponse<Vec<u32>> = ApiResponse::from_body(
            true,
            json!({"success": true, "data": [1], "message": {"k": 1}}),
        );
        assert_eq!(
            resp,
            ApiResponse::Success {
                data: vec![1],
                message: None,
            }
        );
    }

    #[test]
    fn test_mistyped_message_on_failure_falls_back() {
        let resp: ApiResponse<Value> = ApiResponse::from_body(
            false,
            json!({"success": false, "message": ["textAr is required"]}),
        );
        assert!(!resp.is_success());
        assert_eq!(resp.message(), Some("Request failed"));
    }

    #[test]
    fn test_mistyped_success_flag_is_failure_with_message() {
        let resp: ApiResponse<Value> = ApiResponse::from_body(
            true,
            json!({"success": "yes", "message": "Flag must be boolean"}),
        );
        assert_eq!(resp.message(), Some("Flag must be boolean"));
    }

    #[test]
    fn test_absent_data_is_null() {
        let resp: ApiResponse<()> = ApiResponse::from_body(true, json!({"success": true}));
        assert!(resp.is_success());

        let resp: ApiResponse<Option<u32>> = ApiResponse::from_body(true, json!({"success": true}));
        assert_eq!(resp.into_data(), Some(None));
    }

    #[test]
    fn test_mistyped_data_becomes_failure() {
        let resp: ApiResponse<Vec<Value>> =
            ApiResponse::from_body(true, json!({"success": true, "data": {"id": "x"}}));
        let message = resp.message().unwrap();
        assert!(message.starts_with("Malformed response data"));
    }

    #[test]
    fn test_map_keeps_message() {
        let resp = ApiResponse::Success {
            data: 2,
            message: Some("fetched".to_string()),
        }
        .map(|n| n * 10);
        assert_eq!(resp.data(), Some(&20));
        assert_eq!(resp.message(), Some("fetched"));
    }

    #[test]
    fn test_blank_failure_message_is_replaced() {
        let resp: ApiResponse<()> = ApiResponse::failure("  ");
        assert_eq!(resp.message(), Some("Request failed"));
    }
}
