//! Procedure registry: the closed catalog of remote operations.
//!
//! One module per domain area. Each module declares the input/output shapes
//! for its procedures, the descriptor constants binding those shapes to wire
//! names, and the convenience methods on [`crate::RpcClient`] that hide the
//! generic machinery. Descriptors are the contract surface — they carry no
//! behavior of their own.
//!
//! Wire names are dot-namespaced (`posts.getRecentPosts`) and globally
//! unique; see the registry test at the bottom of this module.

use serde::{Deserialize, Serialize};

pub mod comments;
pub mod follows;
pub mod friends;
pub mod lists;
pub mod messages;
pub mod notifications;
pub mod places;
pub mod posts;
pub mod users;

/// Generic acknowledgement for mutations with no richer payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub success: bool,
}

/// Cursor-pagination input shared by plain listing queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Input addressing a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdInput {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use crate::procedure::ProcedureKind;

    /// Every descriptor in the registry: (wire name, kind).
    fn registry() -> Vec<(&'static str, ProcedureKind)> {
        use super::*;

        vec![
            (posts::GET_RECENT_POSTS.name(), posts::GET_RECENT_POSTS.kind()),
            (posts::GET_POST.name(), posts::GET_POST.kind()),
            (posts::CREATE_POST.name(), posts::CREATE_POST.kind()),
            (posts::DELETE_POST.name(), posts::DELETE_POST.kind()),
            (posts::LIKE_POST.name(), posts::LIKE_POST.kind()),
            (posts::UNLIKE_POST.name(), posts::UNLIKE_POST.kind()),
            (posts::SAVE_POST.name(), posts::SAVE_POST.kind()),
            (posts::UNSAVE_POST.name(), posts::UNSAVE_POST.kind()),
            (users::GET_ME.name(), users::GET_ME.kind()),
            (users::GET_USER.name(), users::GET_USER.kind()),
            (users::UPDATE_PROFILE.name(), users::UPDATE_PROFILE.kind()),
            (users::SEARCH_USERS.name(), users::SEARCH_USERS.kind()),
            (users::GET_STREAK.name(), users::GET_STREAK.kind()),
            (users::GET_LEADERBOARD.name(), users::GET_LEADERBOARD.kind()),
            (friends::GET_FRIENDS.name(), friends::GET_FRIENDS.kind()),
            (
                friends::GET_PENDING_REQUESTS.name(),
                friends::GET_PENDING_REQUESTS.kind(),
            ),
            (friends::SEND_REQUEST.name(), friends::SEND_REQUEST.kind()),
            (friends::ACCEPT_REQUEST.name(), friends::ACCEPT_REQUEST.kind()),
            (friends::DECLINE_REQUEST.name(), friends::DECLINE_REQUEST.kind()),
            (friends::REMOVE_FRIEND.name(), friends::REMOVE_FRIEND.kind()),
            (follows::FOLLOW_USER.name(), follows::FOLLOW_USER.kind()),
            (follows::UNFOLLOW_USER.name(), follows::UNFOLLOW_USER.kind()),
            (follows::GET_FOLLOWERS.name(), follows::GET_FOLLOWERS.kind()),
            (follows::GET_FOLLOWING.name(), follows::GET_FOLLOWING.kind()),
            (comments::GET_COMMENTS.name(), comments::GET_COMMENTS.kind()),
            (comments::ADD_COMMENT.name(), comments::ADD_COMMENT.kind()),
            (comments::DELETE_COMMENT.name(), comments::DELETE_COMMENT.kind()),
            (comments::LIKE_COMMENT.name(), comments::LIKE_COMMENT.kind()),
            (messages::GET_CHATROOMS.name(), messages::GET_CHATROOMS.kind()),
            (messages::GET_MESSAGES.name(), messages::GET_MESSAGES.kind()),
            (messages::SEND_MESSAGE.name(), messages::SEND_MESSAGE.kind()),
            (messages::MARK_READ.name(), messages::MARK_READ.kind()),
            (messages::CREATE_CHATROOM.name(), messages::CREATE_CHATROOM.kind()),
            (
                notifications::GET_NOTIFICATIONS.name(),
                notifications::GET_NOTIFICATIONS.kind(),
            ),
            (notifications::MARK_READ.name(), notifications::MARK_READ.kind()),
            (
                notifications::MARK_ALL_READ.name(),
                notifications::MARK_ALL_READ.kind(),
            ),
            (
                notifications::GET_UNREAD_COUNT.name(),
                notifications::GET_UNREAD_COUNT.kind(),
            ),
            (lists::GET_LISTS.name(), lists::GET_LISTS.kind()),
            (lists::GET_LIST.name(), lists::GET_LIST.kind()),
            (lists::CREATE_LIST.name(), lists::CREATE_LIST.kind()),
            (lists::ADD_PLACE.name(), lists::ADD_PLACE.kind()),
            (lists::REMOVE_PLACE.name(), lists::REMOVE_PLACE.kind()),
            (lists::DELETE_LIST.name(), lists::DELETE_LIST.kind()),
            (places::SEARCH_PLACES.name(), places::SEARCH_PLACES.kind()),
            (places::GET_PLACE.name(), places::GET_PLACE.kind()),
            (places::GET_NEARBY.name(), places::GET_NEARBY.kind()),
            (places::SAVE_PLACE.name(), places::SAVE_PLACE.kind()),
        ]
    }

    #[test]
    fn test_wire_names_globally_unique() {
        let entries = registry();
        let mut seen = std::collections::HashSet::new();
        for (name, _) in &entries {
            assert!(seen.insert(*name), "duplicate wire name: {name}");
        }
    }

    #[test]
    fn test_wire_names_dot_namespaced() {
        for (name, _) in registry() {
            let (domain, op) = name
                .split_once('.')
                .unwrap_or_else(|| panic!("wire name '{name}' is not dot-namespaced"));
            assert!(!domain.is_empty() && !op.is_empty());
        }
    }

    #[test]
    fn test_get_procedures_are_queries() {
        // Reads are named get*/search*; all of them must be queries so GET
        // and caller-side retry policy stay safe.
        for (name, kind) in registry() {
            let op = name.split_once('.').unwrap().1;
            if op.starts_with("get") || op.starts_with("search") {
                assert_eq!(kind, ProcedureKind::Query, "{name} should be a query");
            }
        }
    }

    #[test]
    fn test_page_input_omits_missing_cursor() {
        let input = super::PageInput {
            limit: 20,
            cursor: None,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"limit":20}"#);

        let input = super::PageInput {
            limit: 20,
            cursor: Some("abc".to_string()),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"cursor\":\"abc\""));
    }
}
