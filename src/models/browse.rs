//! Settings that shape the card browsing pages.

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_MAX_VISIBLE_PAGES;
use crate::url_state::DEFAULT_PAGE_SIZE;

/// Choices offered by the page-size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 30, 50];

/// The catalog does not report totals, so page counts are estimated from the
/// typical size of one set.
pub const DEFAULT_ESTIMATED_TOTAL_ITEMS: usize = 300;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BrowseSettings {
    /// Set code browsed when the request names none.
    pub default_set: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub max_visible_pages: usize,
    pub estimated_total_items: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            default_set: "dmu".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            estimated_total_items: DEFAULT_ESTIMATED_TOTAL_ITEMS,
        }
    }
}

impl BrowseSettings {
    pub fn total_pages(&self, page_size: usize) -> usize {
        self.estimated_total_items.div_ceil(page_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let settings = BrowseSettings::default();
        assert_eq!(settings.total_pages(20), 15);
        assert_eq!(settings.total_pages(50), 6);
        assert_eq!(settings.total_pages(7), 43);
    }
}
