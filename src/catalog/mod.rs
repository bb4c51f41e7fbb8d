//! Access to the remote card catalog.
//!
//! [`CatalogReader`] is the seam between services and the network. The HTTP
//! implementation lives in [`http`], the query-keyed cache that wraps it in
//! [`cache`].

use async_trait::async_trait;

use crate::domain::card::{Card, CardQuery};
use crate::domain::types::CardId;

pub mod cache;
pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod retry;

pub use errors::{CatalogError, CatalogResult};

#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// One page of cards matching `query`.
    async fn list_cards(&self, query: &CardQuery) -> CatalogResult<Vec<Card>>;

    async fn get_card(&self, id: &CardId) -> CatalogResult<Card>;

    /// Most recent successful result for `query`, even if it is no longer
    /// fresh. Used to keep showing a list after a failed refetch.
    fn last_good_cards(&self, _query: &CardQuery) -> Option<Vec<Card>> {
        None
    }
}
