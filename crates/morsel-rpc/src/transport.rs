//! HTTP transport for tRPC-style procedure calls.
//!
//! [`HttpTransport`] executes one remote-procedure call end to end: build the
//! request, inject auth headers, encode the input, send, validate the HTTP
//! status, and decode the response body. Every failure on that path is
//! normalized into [`ApiError`] here — no raw transport or decode error
//! escapes this module.
//!
//! Wire format: `{base}/trpc/{procedure}`. GET carries the JSON-encoded input
//! in a single `input` query parameter; other verbs send a JSON body.
//! Responses are either a bare JSON value or the envelope
//! `{"result":{"data":...},"error":...}`, with `error` taking precedence.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::AuthProvider;
use crate::error::{ApiError, Result};

/// Per-request timeout applied when none is configured explicitly
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless-per-call HTTP transport.
///
/// Holds only configuration: base URL, the auth capability, and the shared
/// connection pool. Each call constructs its own request and owns its own
/// response buffer, so concurrent calls never interfere. Auth headers are
/// fetched fresh per call, never cached. No automatic retries.
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
    auth: Arc<dyn AuthProvider>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the default 30-second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (TLS backend initialization).
    pub fn new(base_url: impl Into<String>, auth: Arc<dyn AuthProvider>) -> Result<Self> {
        Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
    }

    /// Create a transport with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        auth: Arc<dyn AuthProvider>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::from)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            http,
            auth,
            timeout,
        })
    }

    /// Call a procedure with a typed input and decode a typed output.
    ///
    /// # Errors
    ///
    /// Returns exactly one [`ApiError`] covering auth, encoding, network,
    /// HTTP-status, or decoding failure.
    pub async fn call<I, O>(&self, procedure: &str, input: &I, method: Method) -> Result<O>
    where
        I: Serialize + ?Sized + Sync,
        O: DeserializeOwned,
    {
        let input = serde_json::to_value(input).map_err(ApiError::encoding)?;
        let value = self.execute(procedure, method, input).await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }

    /// Call a procedure that takes no parameters (sends an empty object).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HttpTransport::call`].
    pub async fn call_no_input<O>(&self, procedure: &str, method: Method) -> Result<O>
    where
        O: DeserializeOwned,
    {
        let value = self
            .execute(procedure, method, Value::Object(serde_json::Map::new()))
            .await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }

    /// Execute a call at the JSON level: encoded input in, envelope-unwrapped
    /// payload out.
    ///
    /// # Errors
    ///
    /// Returns exactly one [`ApiError`]; partial responses are never
    /// observable.
    pub async fn execute(&self, procedure: &str, method: Method, input: Value) -> Result<Value> {
        if procedure.is_empty() {
            return Err(ApiError::Unknown(
                "procedure name must not be empty".to_string(),
            ));
        }

        let url = format!("{}/trpc/{}", self.base_url, procedure);
        tracing::debug!("rpc {} {} -> {}", method, procedure, url);

        // Auth failure short-circuits: nothing hits the wire.
        let headers = self.auth.headers().await?;

        let mut request = self
            .http
            .request(method.clone(), &url)
            .timeout(self.timeout);
        for (name, value) in &headers {
            request = request.header(name, value);
        }

        request = if method == Method::GET {
            let encoded = serde_json::to_string(&input).map_err(ApiError::encoding)?;
            request.query(&[("input", encoded)])
        } else {
            request.json(&input)
        };

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from)?;

        match status {
            200..=299 => {}
            400..=599 => {
                let message = extract_error_message(&body);
                let err = ApiError::from_status_code(status, message);
                tracing::warn!("rpc {} failed with status {}: {}", procedure, status, err);
                return Err(err);
            }
            _ => {
                tracing::warn!("rpc {} returned unexpected status {}", procedure, status);
                return Err(ApiError::InvalidResponse);
            }
        }

        let value: Value = serde_json::from_str(&body).map_err(ApiError::decoding)?;
        unwrap_envelope(value)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, serde::Deserialize)]
struct EnvelopeError {
    message: Option<String>,
    code: Option<i64>,
    data: Option<EnvelopeErrorData>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeErrorData {
    http_status: Option<u16>,
}

/// Unwrap the tRPC response envelope.
///
/// An `error` member wins over any partial `result`. A present
/// `result.data` is the payload. Anything else is returned unchanged so
/// bare (non-enveloped) responses decode directly.
fn unwrap_envelope(value: Value) -> Result<Value> {
    let Value::Object(map) = value else {
        return Ok(value);
    };

    if let Some(error) = map.get("error")
        && !error.is_null()
    {
        return Err(envelope_error(error));
    }

    if let Some(data) = map.get("result").and_then(|result| result.get("data")) {
        return Ok(data.clone());
    }

    Ok(Value::Object(map))
}

fn envelope_error(error: &Value) -> ApiError {
    if let Some(text) = error.as_str() {
        return ApiError::Server {
            status: 500,
            message: Some(text.to_string()),
        };
    }

    match serde_json::from_value::<EnvelopeError>(error.clone()) {
        Ok(err) => {
            let status = err
                .data
                .and_then(|data| data.http_status)
                .or_else(|| err.code.and_then(|code| u16::try_from(code).ok()))
                .unwrap_or(500);
            ApiError::Server {
                status,
                message: err.message,
            }
        }
        Err(_) => ApiError::InvalidResponse,
    }
}

/// Pull a human-readable message out of an error body.
///
/// Tries JSON `message`, then `error`, then an `errors` string array joined
/// by ", "; falls back to the raw body text; returns `None` for an empty
/// body.
fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return Some(message.to_string());
        }
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Some(message.to_string());
        }
        if let Some(errors) = value.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors.iter().filter_map(Value::as_str).collect();
            if !messages.is_empty() {
                return Some(messages.join(", "));
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message_field() {
        let body = r#"{"message":"Caption too long"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Caption too long".to_string())
        );
    }

    #[test]
    fn test_extract_error_field() {
        let body = r#"{"error":"Invalid cursor"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Invalid cursor".to_string())
        );
    }

    #[test]
    fn test_extract_errors_array_joined() {
        let body = r#"{"errors":["username taken","bio too long"]}"#;
        assert_eq!(
            extract_error_message(body),
            Some("username taken, bio too long".to_string())
        );
    }

    #[test]
    fn test_extract_message_wins_over_error() {
        let body = r#"{"message":"first","error":"second"}"#;
        assert_eq!(extract_error_message(body), Some("first".to_string()));
    }

    #[test]
    fn test_extract_falls_back_to_raw_text() {
        assert_eq!(
            extract_error_message("Internal failure"),
            Some("Internal failure".to_string())
        );
    }

    #[test]
    fn test_extract_json_without_known_fields_falls_back() {
        let body = r#"{"detail":"oops"}"#;
        assert_eq!(extract_error_message(body), Some(body.to_string()));
    }

    #[test]
    fn test_extract_empty_body_is_none() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("   "), None);
    }

    #[test]
    fn test_envelope_unwraps_result_data() {
        let value = json!({"result": {"data": {"id": "p1"}}});
        let unwrapped = unwrap_envelope(value).unwrap();
        assert_eq!(unwrapped, json!({"id": "p1"}));
    }

    #[test]
    fn test_envelope_error_takes_precedence_over_result() {
        let value = json!({
            "result": {"data": {"id": "p1"}},
            "error": {"message": "boom", "code": 500}
        });
        let err = unwrap_envelope(value).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: Some("boom".to_string()),
            }
        );
    }

    #[test]
    fn test_envelope_error_prefers_http_status_from_data() {
        let value = json!({
            "error": {"message": "gone", "code": -32004, "data": {"httpStatus": 410}}
        });
        let err = unwrap_envelope(value).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 410,
                message: Some("gone".to_string()),
            }
        );
    }

    #[test]
    fn test_envelope_null_error_is_ignored() {
        let value = json!({"result": {"data": [1, 2]}, "error": null});
        let unwrapped = unwrap_envelope(value).unwrap();
        assert_eq!(unwrapped, json!([1, 2]));
    }

    #[test]
    fn test_bare_body_passes_through() {
        let value = json!({"posts": [], "totalCount": 0, "page": 1, "totalPages": 0});
        let unwrapped = unwrap_envelope(value.clone()).unwrap();
        assert_eq!(unwrapped, value);
    }

    #[test]
    fn test_bare_array_passes_through() {
        let value = json!([{"id": "n1"}]);
        let unwrapped = unwrap_envelope(value.clone()).unwrap();
        assert_eq!(unwrapped, value);
    }

    #[test]
    fn test_envelope_string_error() {
        let value = json!({"error": "everything is on fire"});
        let err = unwrap_envelope(value).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: Some("everything is on fire".to_string()),
            }
        );
    }
}
