use crate::catalog::CatalogReader;
use crate::domain::types::CardId;
use crate::dto::cards::CardPageData;
use crate::services::{ServiceError, ServiceResult};

/// Loads a single card for its detail page.
///
/// Identifiers that cannot name a card are reported as [`ServiceError::NotFound`]
/// without contacting the catalog.
pub async fn load_card_page<C>(catalog: &C, raw_id: &str) -> ServiceResult<CardPageData>
where
    C: CatalogReader + ?Sized,
{
    let id = CardId::new(raw_id).map_err(|err| {
        log::debug!("Rejected card id {raw_id:?}: {err}");
        ServiceError::NotFound
    })?;

    let card = catalog.get_card(&id).await?;
    let stats = card.stats();

    Ok(CardPageData { card, stats })
}
