//! Response interpretation shared by every operation.
//!
//! The body is always read as text first and only then parsed. Backend error
//! responses are not guaranteed to be JSON, and parsing them directly would hide
//! the real status behind a decode error.

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::transport::RawResponse;

/// Turn a raw response into its decoded JSON body.
///
/// - non-2xx: `ApiError::Http` with a message from [`error_message`]
/// - 2xx with an empty body: `Ok(None)`; the caller synthesizes a default
/// - 2xx with a body that is not JSON: `ApiError::MalformedResponse`
pub(crate) fn interpret(raw: RawResponse) -> ApiResult<Option<Value>> {
    let status = raw.status;
    let text = raw.body.trim();

    if !raw.is_success() {
        let message = error_message(status, text);
        tracing::warn!(status, %message, "backend returned an error status");
        return Err(ApiError::Http { status, message });
    }

    if text.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(text).map(Some).map_err(|error| {
        tracing::warn!(status, %error, "backend returned a body that is not JSON");
        ApiError::MalformedResponse
    })
}

/// Derive an error message for a non-2xx response: a JSON `error` or `message`
/// field, else the raw body, else `HTTP error: <status>`.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        let field = ["error", "message"].into_iter().find_map(|key| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        });
        if let Some(message) = field {
            return message.to_string();
        }
    }

    if !body.is_empty() {
        return body.to_string();
    }

    format!("HTTP error: {status}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"error":"boom"}"#, "boom")]
    #[case(r#"{"message":"team not found"}"#, "team not found")]
    #[case(r#"{"error":"列出文件失敗","message":"AccessDenied"}"#, "列出文件失敗")]
    #[case(r#"{"error":"","message":"fallback"}"#, "fallback")]
    #[case("internal failure", "internal failure")]
    #[case(r#"{"detail":"x"}"#, r#"{"detail":"x"}"#)]
    #[case("", "HTTP error: 502")]
    fn error_messages(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(error_message(502, body), expected);
    }

    #[test]
    fn non_json_success_is_malformed() {
        let result = interpret(RawResponse::new(200, "<html>oops</html>"));
        assert_eq!(result, Err(ApiError::MalformedResponse));
    }

    #[test]
    fn empty_success_is_none() {
        assert_eq!(interpret(RawResponse::new(204, "  ")), Ok(None));
    }

    #[test]
    fn error_status_keeps_its_code() {
        let err = interpret(RawResponse::new(404, "")).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP error: 404");
    }
}
