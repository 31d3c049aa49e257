//! Typed tRPC client for the Morsel backend.
//!
//! This crate provides the protocol layer the app uses to talk to the
//! backend: a closed error taxonomy, an HTTP transport, a declarative
//! procedure registry, and a typed client surface that is fully mockable.
//!
//! # Architecture
//!
//! - [`error`]: the [`ApiError`] taxonomy and its mapping rules
//! - [`auth`]: the [`AuthProvider`] header-capability seam
//! - [`transport`]: [`HttpTransport`] — request build, send, validate, decode
//! - [`procedure`]: typed [`Query`]/[`Mutation`] descriptors
//! - [`procedures`]: the closed catalog of remote operations, by domain
//! - [`client`]: [`RpcClient`] generic dispatch + domain convenience methods
//! - [`mock`]: [`MockTransport`] test double
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use morsel_rpc::{HttpTransport, NoAuth, RpcClient};
//!
//! # async fn example() -> morsel_rpc::Result<()> {
//! let transport = HttpTransport::new("https://api.morsel.app", Arc::new(NoAuth))?;
//! let client = RpcClient::new(transport);
//!
//! let feed = client.get_recent_posts(20, 1).await?;
//! println!("{} posts", feed.posts.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod mock;
pub mod procedure;
pub mod procedures;
pub mod transport;

#[cfg(test)]
mod tests;

// Re-export the client surface
pub use client::{RpcClient, RpcTransport};

// Re-export error types
pub use error::{ApiError, Result};

// Re-export transport and auth seams
pub use auth::{AuthProvider, NoAuth, StaticAuth};
pub use transport::{DEFAULT_TIMEOUT, HttpTransport};

// Re-export descriptor types
pub use procedure::{Mutation, ProcedureKind, Query};

// Re-export the test double
pub use mock::{MockTransport, RecordedCall};

// Re-export commonly used data types
pub use morsel_types::{
    Chatroom, Comment, CursorPage, FriendRequest, FriendRequestStatus, LeaderboardEntry, Message,
    MessageKind, Notification, NotificationKind, Place, PlaceList, Post, PostPage, Streak, User,
};
