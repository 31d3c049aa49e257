//! Shared wire types for Morsel app components.
//!
//! This crate provides the domain entities exchanged with the Morsel backend
//! over the tRPC-style HTTP API. All types serialize with camelCase field
//! names to match the JavaScript wire format, and timestamps are ISO-8601
//! via chrono's serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a Vec that may be null or missing (both become empty vec)
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// One page of a cursor-paginated listing.
///
/// `next_cursor` is `None` when no further pages exist; the server omits the
/// field entirely in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CursorPage<T> {
    #[serde(default = "Vec::new", deserialize_with = "deserialize_null_as_empty_vec")]
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    /// Whether a further page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

/// Page-numbered listing of posts (the feed endpoint predates cursor
/// pagination and still pages by number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    #[serde(default = "Vec::new", deserialize_with = "deserialize_null_as_empty_vec")]
    pub posts: Vec<Post>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
}

/// A food post in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub like_count: u64,
    pub save_count: u64,
    pub comment_count: u64,
    #[serde(default)]
    pub liked_by_me: bool,
    #[serde(default)]
    pub saved_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub follower_count: u64,
    pub following_count: u64,
    pub post_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Posting-streak state for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post_date: Option<DateTime<Utc>>,
}

/// One row of the streak leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub streak: u32,
    pub rank: u32,
}

/// State of a friend request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Declined,
}

/// A friend request between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: FriendRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub like_count: u64,
    #[serde(default)]
    pub liked_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// Message payload kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Place,
}

/// A chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub chatroom_id: String,
    pub sender_id: String,
    pub content: String,
    pub kind: MessageKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A chatroom between two or more users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chatroom {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "deserialize_null_as_empty_vec")]
    pub member_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    pub unread_count: u64,
    pub updated_at: DateTime<Utc>,
}

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    FriendRequest,
    StreakReminder,
}

/// An in-app notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A user-curated list of places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceList {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "deserialize_null_as_empty_vec")]
    pub place_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A restaurant/venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub save_count: u64,
    #[serde(default)]
    pub saved_by_me: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
    }

    fn sample_post() -> Post {
        Post {
            id: "p1".to_string(),
            author_id: "u1".to_string(),
            caption: Some("best ramen in town".to_string()),
            photo_url: None,
            place_id: Some("pl1".to_string()),
            like_count: 3,
            save_count: 1,
            comment_count: 0,
            liked_by_me: true,
            saved_by_me: false,
            created_at: sample_time(),
        }
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let json = serde_json::to_string(&sample_post()).unwrap();
        assert!(json.contains("\"authorId\":\"u1\""));
        assert!(json.contains("\"likeCount\":3"));
        assert!(json.contains("\"likedByMe\":true"));
        assert!(!json.contains("author_id"));
    }

    #[test]
    fn test_post_omits_none_fields() {
        let json = serde_json::to_string(&sample_post()).unwrap();
        assert!(!json.contains("photoUrl"));
    }

    #[test]
    fn test_post_timestamp_iso8601() {
        let json = serde_json::to_string(&sample_post()).unwrap();
        assert!(json.contains("\"createdAt\":\"2024-06-01T12:30:00Z\""));
    }

    #[test]
    fn test_post_roundtrip() {
        let post = sample_post();
        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_post_defaults_missing_flags() {
        let json = r#"{
            "id": "p2",
            "authorId": "u2",
            "likeCount": 0,
            "saveCount": 0,
            "commentCount": 0,
            "createdAt": "2024-06-01T12:30:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(!post.liked_by_me);
        assert!(!post.saved_by_me);
        assert!(post.caption.is_none());
    }

    #[test]
    fn test_cursor_page_null_cursor() {
        let json = r#"{"items":[],"nextCursor":null}"#;
        let page: CursorPage<Post> = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_cursor_page_absent_cursor() {
        let json = r#"{"items":[]}"#;
        let page: CursorPage<Post> = serde_json::from_str(json).unwrap();
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_cursor_page_null_items() {
        let json = r#"{"items":null,"nextCursor":"abc"}"#;
        let page: CursorPage<Post> = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(page.has_more());
    }

    #[test]
    fn test_cursor_page_omits_none_cursor_on_serialize() {
        let page: CursorPage<Post> = CursorPage::default();
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("nextCursor"));
    }

    #[test]
    fn test_post_page_deserialization() {
        let json = r#"{"posts":[],"totalCount":0,"page":1,"totalPages":0}"#;
        let page: PostPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert!(page.posts.is_empty());
    }

    #[test]
    fn test_friend_request_status_wire_format() {
        let json = serde_json::to_string(&FriendRequestStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let status: FriendRequestStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(status, FriendRequestStatus::Declined);
    }

    #[test]
    fn test_message_kind_wire_format() {
        let json = serde_json::to_string(&MessageKind::Text).unwrap();
        assert_eq!(json, "\"text\"");
    }

    #[test]
    fn test_notification_kind_camel_case() {
        let json = serde_json::to_string(&NotificationKind::FriendRequest).unwrap();
        assert_eq!(json, "\"friendRequest\"");

        let kind: NotificationKind = serde_json::from_str("\"streakReminder\"").unwrap();
        assert_eq!(kind, NotificationKind::StreakReminder);
    }

    #[test]
    fn test_chatroom_null_member_ids() {
        let json = r#"{
            "id": "c1",
            "memberIds": null,
            "unreadCount": 2,
            "updatedAt": "2024-06-01T12:30:00Z"
        }"#;
        let room: Chatroom = serde_json::from_str(json).unwrap();
        assert!(room.member_ids.is_empty());
        assert_eq!(room.unread_count, 2);
        assert!(room.last_message.is_none());
    }

    #[test]
    fn test_streak_roundtrip() {
        let streak = Streak {
            current: 7,
            longest: 21,
            last_post_date: Some(sample_time()),
        };
        let json = serde_json::to_string(&streak).unwrap();
        assert!(json.contains("\"lastPostDate\""));
        let parsed: Streak = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, streak);
    }

    #[test]
    fn test_place_optional_rating() {
        let json = r#"{
            "id": "pl1",
            "name": "Noodle Bar",
            "latitude": 1.29,
            "longitude": 103.85,
            "saveCount": 12
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert!(place.rating.is_none());
        assert!(!place.saved_by_me);
        assert_eq!(place.name, "Noodle Bar");
    }
}
