//! Mock catalog for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::catalog::{CatalogReader, CatalogResult};
use crate::domain::card::{Card, CardQuery};
use crate::domain::types::CardId;

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogReader for Catalog {
        async fn list_cards(&self, query: &CardQuery) -> CatalogResult<Vec<Card>>;
        async fn get_card(&self, id: &CardId) -> CatalogResult<Card>;
        fn last_good_cards(&self, query: &CardQuery) -> Option<Vec<Card>>;
    }
}
