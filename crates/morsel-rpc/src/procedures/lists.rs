//! Place-list procedures.

use morsel_types::PlaceList;
use serde::{Deserialize, Serialize};

use super::Ack;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const GET_LISTS: Query<(), Vec<PlaceList>> = Query::new("lists.getLists");
pub const GET_LIST: Query<ListIdInput, Option<PlaceList>> = Query::new("lists.getList");
pub const CREATE_LIST: Mutation<CreateListInput, PlaceList> = Mutation::new("lists.createList");
pub const ADD_PLACE: Mutation<ListPlaceInput, PlaceList> = Mutation::new("lists.addPlace");
pub const REMOVE_PLACE: Mutation<ListPlaceInput, PlaceList> = Mutation::new("lists.removePlace");
pub const DELETE_LIST: Mutation<ListIdInput, Ack> = Mutation::new("lists.deleteList");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIdInput {
    pub list_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlaceInput {
    pub list_id: String,
    pub place_id: String,
}

impl RpcClient {
    /// All lists owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_lists(&self) -> Result<Vec<PlaceList>> {
        self.query_empty(GET_LISTS).await
    }

    /// Look up a list by id; `None` when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_list(&self, list_id: &str) -> Result<Option<PlaceList>> {
        self.query(
            GET_LIST,
            &ListIdInput {
                list_id: list_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn create_list(&self, name: &str, description: Option<String>) -> Result<PlaceList> {
        self.mutate(
            CREATE_LIST,
            &CreateListInput {
                name: name.to_string(),
                description,
            },
        )
        .await
    }

    /// Add a place to a list; returns the updated list.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn add_place_to_list(&self, list_id: &str, place_id: &str) -> Result<PlaceList> {
        self.mutate(
            ADD_PLACE,
            &ListPlaceInput {
                list_id: list_id.to_string(),
                place_id: place_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn remove_place_from_list(
        &self,
        list_id: &str,
        place_id: &str,
    ) -> Result<PlaceList> {
        self.mutate(
            REMOVE_PLACE,
            &ListPlaceInput {
                list_id: list_id.to_string(),
                place_id: place_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn delete_list(&self, list_id: &str) -> Result<Ack> {
        self.mutate(
            DELETE_LIST,
            &ListIdInput {
                list_id: list_id.to_string(),
            },
        )
        .await
    }
}
