//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::card::Card;
use crate::pagination::{ItemRange, PaginationState};

/// Result payload returned by [`crate::services::api::list_cards`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub page: usize,
    pub page_size: usize,
    /// Estimated; the catalog does not report totals.
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub state: PaginationState,
    pub item_range: ItemRange,
}

/// Body returned alongside error statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
