//! Direct-message procedures.

use morsel_types::{Chatroom, CursorPage, Message, MessageKind};
use serde::{Deserialize, Serialize};

use super::{Ack, PageInput};
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_CHATROOMS: Query<PageInput, CursorPage<Chatroom>> =
    Query::new("messages.getChatrooms");
pub const GET_MESSAGES: Query<GetMessagesInput, CursorPage<Message>> =
    Query::new("messages.getMessages");
pub const SEND_MESSAGE: Mutation<SendMessageInput, Message> =
    Mutation::new("messages.sendMessage");
pub const MARK_READ: Mutation<ChatroomIdInput, Ack> = Mutation::new("messages.markRead");
pub const CREATE_CHATROOM: Mutation<CreateChatroomInput, Chatroom> =
    Mutation::new("messages.createChatroom");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessagesInput {
    pub chatroom_id: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageInput {
    pub chatroom_id: String,
    pub content: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatroomIdInput {
    pub chatroom_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatroomInput {
    pub member_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RpcClient {
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_chatrooms(
        &self,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<Chatroom>> {
        self.query(GET_CHATROOMS, &PageInput { limit, cursor }).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_messages(
        &self,
        chatroom_id: &str,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<Message>> {
        self.query(
            GET_MESSAGES,
            &GetMessagesInput {
                chatroom_id: chatroom_id.to_string(),
                limit,
                cursor,
            },
        )
        .await
    }

    /// Send one message. Callers needing ordering ("B after A is
    /// acknowledged") must await each send before issuing the next — the
    /// client does no queuing.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn send_message(
        &self,
        chatroom_id: &str,
        content: &str,
        kind: MessageKind,
    ) -> Result<Message> {
        self.mutate(
            SEND_MESSAGE,
            &SendMessageInput {
                chatroom_id: chatroom_id.to_string(),
                content: content.to_string(),
                kind,
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn mark_chatroom_read(&self, chatroom_id: &str) -> Result<Ack> {
        self.mutate(
            MARK_READ,
            &ChatroomIdInput {
                chatroom_id: chatroom_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn create_chatroom(
        &self,
        member_ids: Vec<String>,
        name: Option<String>,
    ) -> Result<Chatroom> {
        self.mutate(CREATE_CHATROOM, &CreateChatroomInput { member_ids, name })
            .await
    }
}
