//! Typed RPC client.
//!
//! [`RpcClient`] is the single entry point application code uses to reach the
//! backend. It dispatches typed procedure descriptors over a [`RpcTransport`]
//! — the real [`HttpTransport`] in production, [`crate::mock::MockTransport`]
//! in tests — and performs zero recovery: every [`ApiError`] from the
//! transport propagates unchanged.
//!
//! Domain convenience methods (posts, users, friends, ...) live next to their
//! descriptors in [`crate::procedures`] as further `impl RpcClient` blocks.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::procedure::{Mutation, ProcedureKind, Query};
use crate::transport::HttpTransport;

/// JSON-level dispatch seam between the typed client and the wire.
///
/// Deliberately dyn-compatible and tiny so a test double can stand in for
/// the whole network stack.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Execute one procedure call.
    ///
    /// # Errors
    ///
    /// Returns exactly one [`ApiError`] on any failure.
    async fn execute(&self, procedure: &str, kind: ProcedureKind, input: Value) -> Result<Value>;
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn execute(&self, procedure: &str, kind: ProcedureKind, input: Value) -> Result<Value> {
        HttpTransport::execute(self, procedure, kind.http_method(), input).await
    }
}

/// Typed client over an injectable transport
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn RpcTransport>,
}

impl RpcClient {
    /// Wrap the production HTTP transport.
    #[must_use]
    pub fn new(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Wrap any transport — injection point for test doubles.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Invoke a query procedure (GET).
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`] unchanged; input/output
    /// conversion failures surface as [`ApiError::Encoding`] /
    /// [`ApiError::Decoding`].
    pub async fn query<I, O>(&self, procedure: Query<I, O>, input: &I) -> Result<O>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let input = serde_json::to_value(input).map_err(ApiError::encoding)?;
        let value = self
            .transport
            .execute(procedure.name(), procedure.kind(), input)
            .await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }

    /// Invoke a parameter-less query (sends an empty input object).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RpcClient::query`].
    pub async fn query_empty<O>(&self, procedure: Query<(), O>) -> Result<O>
    where
        O: DeserializeOwned,
    {
        let value = self
            .transport
            .execute(
                procedure.name(),
                procedure.kind(),
                Value::Object(serde_json::Map::new()),
            )
            .await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }

    /// Invoke a mutation procedure (POST).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RpcClient::query`].
    pub async fn mutate<I, O>(&self, procedure: Mutation<I, O>, input: &I) -> Result<O>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let input = serde_json::to_value(input).map_err(ApiError::encoding)?;
        let value = self
            .transport
            .execute(procedure.name(), procedure.kind(), input)
            .await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }

    /// Invoke a parameter-less mutation.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RpcClient::query`].
    pub async fn mutate_empty<O>(&self, procedure: Mutation<(), O>) -> Result<O>
    where
        O: DeserializeOwned,
    {
        let value = self
            .transport
            .execute(
                procedure.name(),
                procedure.kind(),
                Value::Object(serde_json::Map::new()),
            )
            .await?;
        serde_json::from_value(value).map_err(ApiError::decoding)
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient").finish_non_exhaustive()
    }
}
