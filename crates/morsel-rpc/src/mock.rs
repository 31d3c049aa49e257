//! Mock transport for tests.
//!
//! [`MockTransport`] implements [`RpcTransport`] with canned responses or
//! errors keyed by wire name, and records every call so tests can assert on
//! dispatch without touching the network. Application code depends on the
//! client being substitutable per call, so this type ships in the crate
//! proper rather than behind a test-only flag.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::RpcTransport;
use crate::error::{ApiError, Result};
use crate::procedure::ProcedureKind;

/// One recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub procedure: String,
    pub kind: ProcedureKind,
    pub input: Value,
}

/// Canned-response transport double
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Can a successful response for a wire name.
    pub fn respond(&self, procedure: impl Into<String>, value: Value) {
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .insert(procedure.into(), Ok(value));
    }

    /// Can a failure for a wire name.
    pub fn fail(&self, procedure: impl Into<String>, error: ApiError) {
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .insert(procedure.into(), Err(error));
    }

    /// Every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }

    /// Number of calls made to one wire name.
    #[must_use]
    pub fn call_count(&self, procedure: &str) -> usize {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .iter()
            .filter(|call| call.procedure == procedure)
            .count()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn execute(&self, procedure: &str, kind: ProcedureKind, input: Value) -> Result<Value> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedCall {
                procedure: procedure.to_string(),
                kind,
                input,
            });

        self.responses
            .lock()
            .expect("mock lock poisoned")
            .get(procedure)
            .cloned()
            .unwrap_or_else(|| {
                Err(ApiError::Unknown(format!(
                    "no canned response for procedure '{procedure}'"
                )))
            })
    }
}
