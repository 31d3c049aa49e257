//! Procedure descriptors.
//!
//! A descriptor is a purely declarative handle for one named remote
//! operation: its dot-namespaced wire name plus phantom input/output types.
//! Descriptors are defined as module-level constants in [`crate::procedures`]
//! and never constructed at runtime, so the compiler enforces input/output
//! agreement at every call site.

use std::marker::PhantomData;

use reqwest::Method;

/// Whether a procedure reads or writes.
///
/// The kind determines the HTTP verb and what retry policy is safe for a
/// caller to layer on top: queries are idempotent, mutations are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

impl ProcedureKind {
    /// HTTP verb this kind maps to.
    #[must_use]
    pub fn http_method(self) -> Method {
        match self {
            Self::Query => Method::GET,
            Self::Mutation => Method::POST,
        }
    }
}

/// Descriptor for an idempotent, read-only procedure (transported over GET)
pub struct Query<I, O> {
    name: &'static str,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I, O> Query<I, O> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ProcedureKind {
        ProcedureKind::Query
    }
}

/// Descriptor for a state-changing procedure (transported over POST)
pub struct Mutation<I, O> {
    name: &'static str,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I, O> Mutation<I, O> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ProcedureKind {
        ProcedureKind::Mutation
    }
}

// Manual impls: derived Clone/Copy would wrongly require I: Clone, O: Clone.
impl<I, O> Clone for Query<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<I, O> Copy for Query<I, O> {}

impl<I, O> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<I, O> Copy for Mutation<I, O> {}

impl<I, O> std::fmt::Debug for Query<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query").field("name", &self.name).finish()
    }
}

impl<I, O> std::fmt::Debug for Mutation<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation").field("name", &self.name).finish()
    }
}
