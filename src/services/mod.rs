//! Services assembling page data from the catalog and pagination state.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::domain::card::{CardFilters, CardQuery};
use crate::models::browse::BrowseSettings;
use crate::pagination::sanitize_page;
use crate::url_state::{Location, PaginationUrlStore};

pub mod api;
pub mod cards;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Catalog unavailable: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => ServiceError::NotFound,
            other => ServiceError::Catalog(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Builds the catalog request for the store's page, clamped to the estimated
/// page count. Returns the query and that page count.
pub fn resolve_query<L: Location>(
    store: &PaginationUrlStore<L>,
    mut filters: CardFilters,
    settings: &BrowseSettings,
) -> (CardQuery, usize) {
    let page_size = store.page_size();
    let total_pages = settings.total_pages(page_size);
    let page = sanitize_page(store.current_page(), total_pages);

    if filters.set.is_none() {
        filters.set = Some(settings.default_set.clone());
    }

    (CardQuery::new(page, page_size).filters(filters), total_pages)
}
