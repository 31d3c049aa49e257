//! Error taxonomy for the Morsel RPC client.
//!
//! Every failure the client can surface is one variant of [`ApiError`] — raw
//! transport or decode errors never escape the transport layer. Mapping rules
//! live here so that callers pattern-match variants instead of inspecting
//! underlying exceptions.
//!
//! Display text, recovery suggestions, analytics classification, and the
//! monitoring policy are pure functions over the variant tag, each
//! independently testable.

use std::error::Error as StdError;

/// Closed set of failure categories for RPC calls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Generic transport fault, carries the underlying error text
    #[error("network error: {0}")]
    Network(String),

    #[error("connection lost")]
    ConnectionLost,

    #[error("request timed out")]
    Timeout,

    /// 4xx/5xx status with no dedicated variant
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("internal server error")]
    InternalServerError,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("bad request: {}", .0.as_deref().unwrap_or("no message"))]
    BadRequest(Option<String>),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found: {}", .0.as_deref().unwrap_or("resource"))]
    NotFound(Option<String>),

    #[error("conflict: {}", .0.as_deref().unwrap_or("no message"))]
    Conflict(Option<String>),

    #[error("too many requests")]
    TooManyRequests,

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    /// Non-HTTP or malformed response object
    #[error("invalid response")]
    InvalidResponse,

    /// Payload cannot be interpreted
    #[error("invalid data")]
    InvalidData,

    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("limit exceeded: {0}")]
    ResourceLimitExceeded(String),

    #[error("operation not allowed: {0}")]
    OperationNotAllowed(String),

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token")]
    InvalidToken,

    #[error("authentication required")]
    AuthenticationRequired,

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Map an HTTP status code (plus any extracted server message) to a
    /// variant.
    ///
    /// 404 deliberately drops the server-supplied message: callers depend on
    /// the generic not-found text and the reference behavior does the same.
    /// Non-4xx/5xx codes should never reach this function and map to
    /// [`ApiError::Unknown`].
    #[must_use]
    pub fn from_status_code(status: u16, message: Option<String>) -> Self {
        match status {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound(None),
            409 => Self::Conflict(message),
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            400..=599 => Self::Server { status, message },
            _ => Self::Unknown(format!("unexpected status code {status}")),
        }
    }

    /// Normalize any lower-level fault into the taxonomy.
    ///
    /// Idempotent: an error that is already an [`ApiError`] passes through
    /// unchanged. Transport faults map by kind (timeout, connect, other),
    /// JSON faults map to [`ApiError::Decoding`], everything else becomes
    /// [`ApiError::Unknown`].
    #[must_use]
    pub fn from_cause(cause: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        let cause = match cause.downcast::<Self>() {
            Ok(err) => return *err,
            Err(other) => other,
        };
        let cause = match cause.downcast::<reqwest::Error>() {
            Ok(err) => return Self::from(*err),
            Err(other) => other,
        };
        match cause.downcast::<serde_json::Error>() {
            Ok(err) => Self::Decoding(err.to_string()),
            Err(other) => Self::Unknown(other.to_string()),
        }
    }

    pub(crate) fn encoding(err: impl std::fmt::Display) -> Self {
        Self::Encoding(err.to_string())
    }

    pub(crate) fn decoding(err: impl std::fmt::Display) -> Self {
        Self::Decoding(err.to_string())
    }

    /// Human-readable description suitable for direct display.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Network(_) => "A network error occurred.".to_string(),
            Self::ConnectionLost => "The connection was lost.".to_string(),
            Self::Timeout => "The request timed out.".to_string(),
            Self::Server { status, message } => message.clone().unwrap_or_else(|| {
                format!("The server returned an error (status {status}).")
            }),
            Self::InternalServerError => "Something went wrong on our end.".to_string(),
            Self::ServiceUnavailable => {
                "The service is temporarily unavailable.".to_string()
            }
            Self::BadRequest(message) => message
                .clone()
                .unwrap_or_else(|| "The request was invalid.".to_string()),
            Self::Unauthorized => "You need to sign in to do that.".to_string(),
            Self::Forbidden => "You don't have permission to do that.".to_string(),
            Self::NotFound(resource) => match resource {
                Some(name) => format!("{name} was not found."),
                None => "The requested item was not found.".to_string(),
            },
            Self::Conflict(message) => message
                .clone()
                .unwrap_or_else(|| "This conflicts with an existing item.".to_string()),
            Self::TooManyRequests => "You're doing that too often.".to_string(),
            Self::Decoding(_) | Self::InvalidData => {
                "The server response could not be read.".to_string()
            }
            Self::Encoding(_) => "The request could not be prepared.".to_string(),
            Self::InvalidResponse => "The server response was invalid.".to_string(),
            Self::Validation(messages) => {
                if messages.is_empty() {
                    "Some fields are invalid.".to_string()
                } else {
                    messages.join("\n")
                }
            }
            Self::ResourceLimitExceeded(limit) => {
                format!("You've reached the {limit} limit.")
            }
            Self::OperationNotAllowed(reason) => reason.clone(),
            Self::TokenExpired => "Your session has expired.".to_string(),
            Self::InvalidToken | Self::AuthenticationRequired => {
                "Please sign in again.".to_string()
            }
            Self::Unknown(_) => "Something went wrong.".to_string(),
        }
    }

    /// Optional suggestion the UI can show next to the description.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Network(_) | Self::ConnectionLost => {
                Some("Check your internet connection and try again.")
            }
            Self::Timeout | Self::ServiceUnavailable | Self::InternalServerError => {
                Some("Try again in a moment.")
            }
            Self::TooManyRequests => Some("Wait a bit before trying again."),
            Self::Unauthorized
            | Self::TokenExpired
            | Self::InvalidToken
            | Self::AuthenticationRequired => Some("Sign in and try again."),
            _ => None,
        }
    }

    /// Stable machine-readable classification for analytics events.
    #[must_use]
    pub fn analytics_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "network_error",
            Self::ConnectionLost => "connection_lost",
            Self::Timeout => "timeout",
            Self::Server { .. } => "server_error",
            Self::InternalServerError => "internal_server_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::BadRequest(_) => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::TooManyRequests => "too_many_requests",
            Self::Decoding(_) => "decoding_error",
            Self::Encoding(_) => "encoding_error",
            Self::InvalidResponse => "invalid_response",
            Self::InvalidData => "invalid_data",
            Self::Validation(_) => "validation_error",
            Self::ResourceLimitExceeded(_) => "resource_limit_exceeded",
            Self::OperationNotAllowed(_) => "operation_not_allowed",
            Self::TokenExpired => "token_expired",
            Self::InvalidToken => "invalid_token",
            Self::AuthenticationRequired => "authentication_required",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether this error should be sent to monitoring.
    ///
    /// User-caused errors and expected network conditions are excluded so
    /// monitoring isn't flooded with noise.
    #[must_use]
    pub fn should_report(&self) -> bool {
        !matches!(
            self,
            Self::Unauthorized
                | Self::Forbidden
                | Self::NotFound(_)
                | Self::Validation(_)
                | Self::Timeout
                | Self::ConnectionLost
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionLost
        } else {
            Self::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
