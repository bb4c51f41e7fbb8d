use serde::Serialize;

use crate::domain::card::{Card, CardFilters};
use crate::pagination::Paginated;
use crate::ui::dropdown::DropdownView;

/// One button of the pagination control.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    /// Accessible name for icon-only buttons.
    pub aria_label: Option<String>,
    pub active: bool,
    pub disabled: bool,
}

/// Links rendered by `partials/pagination.html`.
#[derive(Debug, Serialize)]
pub struct PaginationNav {
    pub first: Option<PageLink>,
    pub previous: PageLink,
    pub pages: Vec<PageLink>,
    pub next: PageLink,
    pub last: Option<PageLink>,
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Current page of cards with its page window.
    pub cards: Paginated<Card>,
    /// "Showing 41-60 of 300 results". Absent when there are no cards.
    pub summary: Option<String>,
    /// Absent when everything fits on one page or there are no cards.
    pub navigation: Option<PaginationNav>,
    pub page_size_selector: DropdownView,
    /// Set when the catalog could not be reached; `cards` then holds the
    /// last good list for the same query, if any.
    pub error: Option<String>,
    pub filters: CardFilters,
}

/// Initial state of the filter sidebar as rendered into the layout.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SidebarView {
    pub open: bool,
    /// Mirrors the `overflow: hidden` lock the open sidebar puts on `<body>`.
    pub scroll_locked: bool,
}

impl SidebarView {
    pub fn closed() -> Self {
        Self {
            open: false,
            scroll_locked: false,
        }
    }
}
