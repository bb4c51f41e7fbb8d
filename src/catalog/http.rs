//! HTTP client for the public card catalog API.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::catalog::retry::{RetryPolicy, retry_with_backoff};
use crate::catalog::{CatalogError, CatalogReader, CatalogResult};
use crate::domain::card::{Card, CardQuery, secure_image_url};
use crate::domain::types::CardId;

pub const DEFAULT_CATALOG_URL: &str = "https://api.magicthegathering.io/v1";

/// Card as returned by the catalog API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCard {
    id: String,
    name: String,
    image_url: Option<String>,
    mana_cost: Option<String>,
    #[serde(rename = "type")]
    type_line: Option<String>,
    rarity: Option<String>,
    set: Option<String>,
    set_name: Option<String>,
    text: Option<String>,
    power: Option<String>,
    toughness: Option<String>,
}

impl From<ApiCard> for Card {
    fn from(card: ApiCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            image_url: card.image_url.as_deref().map(secure_image_url),
            mana_cost: card.mana_cost,
            type_line: card.type_line,
            rarity: card.rarity,
            set_code: card.set,
            set_name: card.set_name,
            text: card.text,
            power: card.power,
            toughness: card.toughness,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CardsResponse {
    cards: Vec<ApiCard>,
}

#[derive(Debug, Deserialize)]
struct CardResponse {
    card: ApiCard,
}

#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> CatalogResult<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> CatalogResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogReader for HttpCatalog {
    /// Cards without an image are left out of listings.
    async fn list_cards(&self, query: &CardQuery) -> CatalogResult<Vec<Card>> {
        let params = query.to_params();
        let response: CardsResponse =
            retry_with_backoff(&self.retry, || self.get_json("/cards", &params), "list_cards")
                .await?;

        Ok(response
            .cards
            .into_iter()
            .map(Card::from)
            .filter(Card::has_image)
            .collect())
    }

    async fn get_card(&self, id: &CardId) -> CatalogResult<Card> {
        let path = format!("/cards/{id}");
        let response: CardResponse =
            retry_with_backoff(&self.retry, || self.get_json(&path, &[]), "get_card").await?;

        Ok(response.card.into())
    }
}
