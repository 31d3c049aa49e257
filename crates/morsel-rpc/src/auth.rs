//! Auth header provider seam.
//!
//! The transport treats authentication as an opaque capability: something
//! that can produce request headers and may fail doing so (expired or missing
//! credential). Headers are fetched fresh on every call — never cached — so
//! credential rotation takes effect on the very next request.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{ApiError, Result};

/// Supplies authentication headers for outgoing requests.
///
/// A failure here is surfaced as a typed error before any network I/O
/// happens; implementations should map their own credential states onto the
/// auth-level variants ([`ApiError::TokenExpired`], [`ApiError::InvalidToken`],
/// [`ApiError::AuthenticationRequired`]).
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current headers to merge into the request, verbatim key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an auth-level [`ApiError`] when no valid credential is
    /// available.
    async fn headers(&self) -> Result<HashMap<String, String>>;
}

/// Provider for unauthenticated calls
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl AuthProvider for NoAuth {
    async fn headers(&self) -> Result<HashMap<String, String>> {
        Ok(HashMap::new())
    }
}

/// Provider backed by a fixed bearer token (CLI and tests)
#[derive(Debug, Clone)]
pub struct StaticAuth {
    token: String,
}

impl StaticAuth {
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn headers(&self) -> Result<HashMap<String, String>> {
        if self.token.is_empty() {
            return Err(ApiError::AuthenticationRequired);
        }
        Ok(HashMap::from([(
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        )]))
    }
}
