use crate::catalog::CatalogReader;
use crate::domain::card::CardFilters;
use crate::dto::api::CardsResponse;
use crate::models::browse::BrowseSettings;
use crate::pagination::{ItemRange, Paginated};
use crate::services::{ServiceResult, resolve_query};
use crate::url_state::{Location, PaginationUrlStore};

/// Returns one page of cards for the `/api/v1/cards` endpoint.
///
/// Unlike the HTML index, a catalog failure is surfaced to the caller.
pub async fn list_cards<C, L>(
    catalog: &C,
    store: &PaginationUrlStore<L>,
    filters: CardFilters,
    settings: &BrowseSettings,
) -> ServiceResult<CardsResponse>
where
    C: CatalogReader + ?Sized,
    L: Location,
{
    let (query, total_pages) = resolve_query(store, filters, settings);
    let cards = catalog.list_cards(&query).await?;

    let paginated = Paginated::with_window(
        cards,
        query.page,
        total_pages,
        settings.max_visible_pages,
    );

    Ok(CardsResponse {
        item_range: ItemRange::new(query.page, query.page_size, settings.estimated_total_items),
        page: paginated.page,
        page_size: query.page_size,
        total_pages: paginated.total_pages,
        pages: paginated.pages,
        state: paginated.state,
        cards: paginated.items,
    })
}
