//! User profile, search, and streak procedures.

use morsel_types::{CursorPage, LeaderboardEntry, Streak, User};
use serde::{Deserialize, Serialize};

use super::UserIdInput;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_ME: Query<(), User> = Query::new("users.getMe");
pub const GET_USER: Query<UserIdInput, Option<User>> = Query::new("users.getUser");
pub const UPDATE_PROFILE: Mutation<UpdateProfileInput, User> =
    Mutation::new("users.updateProfile");
pub const SEARCH_USERS: Query<SearchUsersInput, CursorPage<User>> =
    Query::new("users.searchUsers");
pub const GET_STREAK: Query<(), Streak> = Query::new("users.getStreak");
pub const GET_LEADERBOARD: Query<LeaderboardInput, Vec<LeaderboardEntry>> =
    Query::new("users.getLeaderboard");

/// Partial profile update; absent fields are left unchanged server-side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersInput {
    pub query: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardInput {
    pub limit: u32,
}

impl RpcClient {
    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_me(&self) -> Result<User> {
        self.query_empty(GET_ME).await
    }

    /// Look up a user by id; `None` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.query(
            GET_USER,
            &UserIdInput {
                user_id: user_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn update_profile(&self, input: UpdateProfileInput) -> Result<User> {
        self.mutate(UPDATE_PROFILE, &input).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn search_users(
        &self,
        query: &str,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<User>> {
        self.query(
            SEARCH_USERS,
            &SearchUsersInput {
                query: query.to_string(),
                limit,
                cursor,
            },
        )
        .await
    }

    /// Current posting streak for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_streak(&self) -> Result<Streak> {
        self.query_empty(GET_STREAK).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        self.query(GET_LEADERBOARD, &LeaderboardInput { limit }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_update_profile_input_partial() {
        let input = UpdateProfileInput {
            bio: Some("noodle enthusiast".to_string()),
            ..UpdateProfileInput::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"bio":"noodle enthusiast"}"#);
    }

    #[tokio::test]
    async fn test_get_me_sends_empty_input() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            "users.getMe",
            json!({
                "id": "u1",
                "username": "noods",
                "followerCount": 10,
                "followingCount": 5,
                "postCount": 42,
                "createdAt": "2024-06-01T12:30:00Z"
            }),
        );
        let client = RpcClient::with_transport(mock.clone());

        let me = client.get_me().await.unwrap();
        assert_eq!(me.username, "noods");
        assert_eq!(mock.calls()[0].input, json!({}));
    }

    #[tokio::test]
    async fn test_search_users_passes_cursor() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("users.searchUsers", json!({"items": [], "nextCursor": null}));
        let client = RpcClient::with_transport(mock.clone());

        let page = client
            .search_users("ramen", 10, Some("c2".to_string()))
            .await
            .unwrap();
        assert!(!page.has_more());
        assert_eq!(
            mock.calls()[0].input,
            json!({"query": "ramen", "limit": 10, "cursor": "c2"})
        );
    }
}
