//! Place discovery procedures.

use morsel_types::{CursorPage, Place};
use serde::{Deserialize, Serialize};

use super::posts::SaveState;
use crate::client::RpcClient;
use crate::error::Result;
use crate::procedure::{Mutation, Query};

pub const SEARCH_PLACES: Query<SearchPlacesInput, CursorPage<Place>> =
    Query::new("places.searchPlaces");
pub const GET_PLACE: Query<PlaceIdInput, Option<Place>> = Query::new("places.getPlace");
pub const GET_NEARBY: Query<NearbyInput, Vec<Place>> = Query::new("places.getNearby");
pub const SAVE_PLACE: Mutation<PlaceIdInput, SaveState> = Mutation::new("places.savePlace");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlacesInput {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceIdInput {
    pub place_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyInput {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<u32>,
    pub limit: u32,
}

impl RpcClient {
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn search_places(&self, input: SearchPlacesInput) -> Result<CursorPage<Place>> {
        self.query(SEARCH_PLACES, &input).await
    }

    /// Look up a place by id; `None` when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_place(&self, place_id: &str) -> Result<Option<Place>> {
        self.query(
            GET_PLACE,
            &PlaceIdInput {
                place_id: place_id.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn get_nearby_places(&self, input: NearbyInput) -> Result<Vec<Place>> {
        self.query(GET_NEARBY, &input).await
    }

    /// # Errors
    ///
    /// Returns an [`crate::ApiError`] if the call fails.
    pub async fn save_place(&self, place_id: &str) -> Result<SaveState> {
        self.mutate(
            SAVE_PLACE,
            &PlaceIdInput {
                place_id: place_id.to_string(),
            },
        )
        .await
    }
}
