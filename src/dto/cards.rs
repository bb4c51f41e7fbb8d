use serde::Serialize;

use crate::domain::card::Card;

/// Data required to render the card detail template.
#[derive(Debug, Serialize)]
pub struct CardPageData {
    pub card: Card,
    /// Power/toughness, for creatures.
    pub stats: Option<String>,
}
