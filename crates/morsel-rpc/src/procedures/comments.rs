//! Comment procedures.

use morsel_types::{Comment, CursorPage};
use serde::{Deserialize, Serialize};

use super::Ack;
use super::posts::LikeState;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_COMMENTS: Query<GetCommentsInput, CursorPage<Comment>> =
    Query::new("comments.getComments");
pub const ADD_COMMENT: Mutation<AddCommentInput, Comment> = Mutation::new("comments.addComment");
pub const DELETE_COMMENT: Mutation<CommentIdInput, Ack> = Mutation::new("comments.deleteComment");
pub const LIKE_COMMENT: Mutation<CommentIdInput, LikeState> =
    Mutation::new("comments.likeComment");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsInput {
    pub post_id: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentInput {
    pub post_id: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdInput {
    pub comment_id: String,
}

impl RpcClient {
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_comments(
        &self,
        post_id: &str,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<Comment>> {
        self.query(
            GET_COMMENTS,
            &GetCommentsInput {
                post_id: post_id.to_string(),
                limit,
                cursor,
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn add_comment(&self, post_id: &str, content: &str) -> Result<Comment> {
        self.mutate(
            ADD_COMMENT,
            &AddCommentInput {
                post_id: post_id.to_string(),
                content: content.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<Ack> {
        self.mutate(
            DELETE_COMMENT,
            &CommentIdInput {
                comment_id: comment_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn like_comment(&self, comment_id: &str) -> Result<LikeState> {
        self.mutate(
            LIKE_COMMENT,
            &CommentIdInput {
                comment_id: comment_id.to_string(),
            },
        )
        .await
    }
}
