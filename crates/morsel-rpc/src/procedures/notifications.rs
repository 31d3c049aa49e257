//! Notification procedures.

use morsel_types::{CursorPage, Notification};
use serde::{Deserialize, Serialize};

use super::{Ack, PageInput};
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_NOTIFICATIONS: Query<PageInput, CursorPage<Notification>> =
    Query::new("notifications.getNotifications");
pub const MARK_READ: Mutation<NotificationIdInput, Ack> =
    Mutation::new("notifications.markRead");
pub const MARK_ALL_READ: Mutation<(), Ack> = Mutation::new("notifications.markAllRead");
pub const GET_UNREAD_COUNT: Query<(), UnreadCount> =
    Query::new("notifications.getUnreadCount");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationIdInput {
    pub notification_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub count: u64,
}

impl RpcClient {
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_notifications(
        &self,
        limit: u32,
        cursor: Option<String>,
    ) -> Result<CursorPage<Notification>> {
        self.query(GET_NOTIFICATIONS, &PageInput { limit, cursor })
            .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<Ack> {
        self.mutate(
            MARK_READ,
            &NotificationIdInput {
                notification_id: notification_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn mark_all_notifications_read(&self) -> Result<Ack> {
        self.mutate_empty(MARK_ALL_READ).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_unread_count(&self) -> Result<UnreadCount> {
        self.query_empty(GET_UNREAD_COUNT).await
    }
}
