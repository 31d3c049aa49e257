//! Friend graph procedures.

use morsel_types::{CursorPage, FriendRequest, User};
use serde::{Deserialize, Serialize};

use super::{Ack, PageInput, UserIdInput};
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_FRIENDS: Query<GetFriendsInput, CursorPage<User>> =
    Query::new("friends.getFriends");
pub const GET_PENDING_REQUESTS: Query<PageInput, CursorPage<FriendRequest>> =
    Query::new("friends.getPendingRequests");
pub const SEND_REQUEST: Mutation<UserIdInput, FriendRequest> =
    Mutation::new("friends.sendRequest");
pub const ACCEPT_REQUEST: Mutation<RequestIdInput, FriendRequest> =
    Mutation::new("friends.acceptRequest");
pub const DECLINE_REQUEST: Mutation<RequestIdInput, Ack> =
    Mutation::new("friends.declineRequest");
pub const REMOVE_FRIEND: Mutation<UserIdInput, Ack> = Mutation::new("friends.removeFriend");

/// `user_id` absent means the signed-in user's friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFriendsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestIdInput {
    pub request_id: String,
}

impl RpcClient {
    /// List a user's friends (own friends when `user_id` is `None`).
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_friends(
        &self,
        user_id: Option<String>,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<User>> {
        self.query(
            GET_FRIENDS,
            &GetFriendsInput {
                user_id,
                limit,
                cursor,
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_pending_requests(
        &self,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<FriendRequest>> {
        self.query(GET_PENDING_REQUESTS, &PageInput { limit, cursor })
            .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn send_friend_request(&self, user_id: &str) -> Result<FriendRequest> {
        self.mutate(
            SEND_REQUEST,
            &UserIdInput {
                user_id: user_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn accept_friend_request(&self, request_id: &str) -> Result<FriendRequest> {
        self.mutate(
            ACCEPT_REQUEST,
            &RequestIdInput {
                request_id: request_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn decline_friend_request(&self, request_id: &str) -> Result<Ack> {
        self.mutate(
            DECLINE_REQUEST,
            &RequestIdInput {
                request_id: request_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn remove_friend(&self, user_id: &str) -> Result<Ack> {
        self.mutate(
            REMOVE_FRIEND,
            &UserIdInput {
                user_id: user_id.to_string(),
            },
        )
        .await
    }
}
