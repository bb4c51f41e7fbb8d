//! Query-keyed memoisation of catalog responses.
//!
//! Entries are keyed by the full [`CardQuery`], so a slow response for an old
//! page can only ever land in that page's slot and never replaces what a newer
//! query displays. Entries stay fresh for `fresh_for` and are kept until
//! `keep_for` so they can back a failed refetch.

use std::hash::Hash;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, warn};

use crate::catalog::{CatalogReader, CatalogResult};
use crate::domain::card::{Card, CardQuery};
use crate::domain::types::CardId;

#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    pub fresh_for: Duration,
    pub keep_for: Duration,
}

impl CachePolicy {
    /// Listings: 5 minutes fresh, 10 minutes kept.
    pub const LISTS: CachePolicy = CachePolicy {
        fresh_for: Duration::from_secs(5 * 60),
        keep_for: Duration::from_secs(10 * 60),
    };

    /// Single cards: 15 minutes fresh, 30 minutes kept.
    pub const CARDS: CachePolicy = CachePolicy {
        fresh_for: Duration::from_secs(15 * 60),
        keep_for: Duration::from_secs(30 * 60),
    };
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// One keyed store with its policy.
struct Slots<K, T> {
    entries: DashMap<K, Entry<T>>,
    policy: CachePolicy,
}

impl<K: Eq + Hash, T: Clone> Slots<K, T> {
    fn new(policy: CachePolicy) -> Self {
        Self {
            entries: DashMap::new(),
            policy,
        }
    }

    fn fresh(&self, key: &K) -> Option<T> {
        self.entries
            .get(key)
            .filter(|entry| entry.age() < self.policy.fresh_for)
            .map(|entry| entry.value.clone())
    }

    fn retained(&self, key: &K) -> Option<T> {
        self.entries
            .get(key)
            .filter(|entry| entry.age() < self.policy.keep_for)
            .map(|entry| entry.value.clone())
    }

    fn store(&self, key: K, value: T) {
        let keep_for = self.policy.keep_for;
        self.entries.retain(|_, entry| entry.age() < keep_for);
        self.entries.insert(key, Entry::new(value));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct CachedCatalog<C> {
    inner: C,
    lists: Slots<CardQuery, Vec<Card>>,
    cards: Slots<CardId, Card>,
}

impl<C: CatalogReader> CachedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self::with_policies(inner, CachePolicy::LISTS, CachePolicy::CARDS)
    }

    pub fn with_policies(inner: C, lists: CachePolicy, cards: CachePolicy) -> Self {
        Self {
            inner,
            lists: Slots::new(lists),
            cards: Slots::new(cards),
        }
    }

    /// Number of cached listings.
    pub fn cached_lists(&self) -> usize {
        self.lists.len()
    }
}

#[async_trait]
impl<C: CatalogReader> CatalogReader for CachedCatalog<C> {
    async fn list_cards(&self, query: &CardQuery) -> CatalogResult<Vec<Card>> {
        if let Some(cards) = self.lists.fresh(query) {
            debug!("Cache hit for {query:?}");
            return Ok(cards);
        }

        match self.inner.list_cards(query).await {
            Ok(cards) => {
                self.lists.store(query.clone(), cards.clone());
                Ok(cards)
            }
            Err(err) => {
                warn!("Failed to refresh {query:?}: {err}");
                Err(err)
            }
        }
    }

    async fn get_card(&self, id: &CardId) -> CatalogResult<Card> {
        if let Some(card) = self.cards.fresh(id) {
            return Ok(card);
        }

        let card = self.inner.get_card(id).await?;
        self.cards.store(id.clone(), card.clone());
        Ok(card)
    }

    fn last_good_cards(&self, query: &CardQuery) -> Option<Vec<Card>> {
        self.lists.retained(query)
    }
}
