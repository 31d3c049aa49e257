//! Follow graph procedures.

use morsel_types::{CursorPage, User};
use serde::{Deserialize, Serialize};

use super::UserIdInput;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const FOLLOW_USER: Mutation<UserIdInput, FollowState> = Mutation::new("follows.followUser");
pub const UNFOLLOW_USER: Mutation<UserIdInput, FollowState> =
    Mutation::new("follows.unfollowUser");
pub const GET_FOLLOWERS: Query<FollowListInput, CursorPage<User>> =
    Query::new("follows.getFollowers");
pub const GET_FOLLOWING: Query<FollowListInput, CursorPage<User>> =
    Query::new("follows.getFollowing");

/// New follow state plus the followed user's updated follower count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowState {
    pub following: bool,
    pub follower_count: u64,
}

/// `user_id` absent means the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl RpcClient {
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn follow_user(&self, user_id: &str) -> Result<FollowState> {
        self.mutate(
            FOLLOW_USER,
            &UserIdInput {
                user_id: user_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn unfollow_user(&self, user_id: &str) -> Result<FollowState> {
        self.mutate(
            UNFOLLOW_USER,
            &UserIdInput {
                user_id: user_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_followers(
        &self,
        user_id: Option<String>,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<User>> {
        self.query(
            GET_FOLLOWERS,
            &FollowListInput {
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
    pub async fn get_following(
        &self,
        user_id: Option<String>,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<User>> {
        self.query(
            GET_FOLLOWING,
            &FollowListInput {
                user_id,
                limit,
                cursor,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::procedure::ProcedureKind;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_follow_returns_state_and_count() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            "follows.followUser",
            json!({"following": true, "followerCount": 101}),
        );
        let client = RpcClient::with_transport(mock.clone());

        let state = client.follow_user("u9").await.unwrap();
        assert!(state.following);
        assert_eq!(state.follower_count, 101);
        assert_eq!(mock.calls()[0].kind, ProcedureKind::Mutation);
    }

    #[tokio::test]
    async fn test_get_followers_is_query() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("follows.getFollowers", json!({"items": []}));
        let client = RpcClient::with_transport(mock.clone());

        client.get_followers(None, 20, None).await.unwrap();
        let call = &mock.calls()[0];
        assert_eq!(call.kind, ProcedureKind::Query);
        assert_eq!(call.input, json!({"limit": 20}));
    }
}
