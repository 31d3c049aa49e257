//! Post feed procedures.

use morsel_types::{Post, PostPage};
use serde::{Deserialize, Serialize};

use super::Ack;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_RECENT_POSTS: Query<GetRecentPostsInput, PostPage> =
    Query::new("posts.getRecentPosts");
pub const GET_POST: Query<PostIdInput, Option<Post>> = Query::new("posts.getPost");
pub const CREATE_POST: Mutation<CreatePostInput, Post> = Mutation::new("posts.createPost");
pub const DELETE_POST: Mutation<PostIdInput, Ack> = Mutation::new("posts.deletePost");
pub const LIKE_POST: Mutation<PostIdInput, LikeState> = Mutation::new("posts.likePost");
pub const UNLIKE_POST: Mutation<PostIdInput, LikeState> = Mutation::new("posts.unlikePost");
pub const SAVE_POST: Mutation<PostIdInput, SaveState> = Mutation::new("posts.savePost");
pub const UNSAVE_POST: Mutation<PostIdInput, SaveState> = Mutation::new("posts.unsavePost");

/// The feed endpoint pages by number, not cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentPostsInput {
    pub limit: u32,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostIdInput {
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// New like state plus updated count, so callers need no follow-up read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u64,
}

/// New save state plus updated count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub saved: bool,
    pub save_count: u64,
}

impl RpcClient {
    /// Fetch one page of the recent-posts feed.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_recent_posts(&self, limit: u32, page: u32) -> Result<PostPage> {
        self.query(GET_RECENT_POSTS, &GetRecentPostsInput { limit, page })
            .await
    }

    /// Look up a post by id; `None` when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_post(&self, post_id: &str) -> Result<Option<Post>> {
        self.query(
            GET_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn create_post(&self, input: CreatePostInput) -> Result<Post> {
        self.mutate(CREATE_POST, &input).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn delete_post(&self, post_id: &str) -> Result<Ack> {
        self.mutate(
            DELETE_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn like_post(&self, post_id: &str) -> Result<LikeState> {
        self.mutate(
            LIKE_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn unlike_post(&self, post_id: &str) -> Result<LikeState> {
        self.mutate(
            UNLIKE_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn save_post(&self, post_id: &str) -> Result<SaveState> {
        self.mutate(
            SAVE_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn unsave_post(&self, post_id: &str) -> Result<SaveState> {
        self.mutate(
            UNSAVE_POST,
            &PostIdInput {
                post_id: post_id.to_string(),
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

    #[test]
    fn test_feed_input_wire_shape() {
        let input = GetRecentPostsInput { limit: 20, page: 1 };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, json!({"limit": 20, "page": 1}));
    }

    #[test]
    fn test_create_post_omits_empty_fields() {
        let input = CreatePostInput {
            caption: Some("pho night".to_string()),
            photo_url: None,
            place_id: None,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"caption":"pho night"}"#);
    }

    #[tokio::test]
    async fn test_like_post_dispatches_mutation() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("posts.likePost", json!({"liked": true, "likeCount": 4}));
        let client = RpcClient::with_transport(mock.clone());

        let state = client.like_post("p1").await.unwrap();
        assert_eq!(
            state,
            LikeState {
                liked: true,
                like_count: 4,
            }
        );

        let calls = mock.calls();
        assert_eq!(calls[0].procedure, "posts.likePost");
        assert_eq!(calls[0].kind, ProcedureKind::Mutation);
        assert_eq!(calls[0].input, json!({"postId": "p1"}));
    }

    #[tokio::test]
    async fn test_get_post_missing_is_none_not_error() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("posts.getPost", json!(null));
        let client = RpcClient::with_transport(mock);

        let post = client.get_post("missing").await.unwrap();
        assert!(post.is_none());
    }
}
