//! Page-window and boundary arithmetic shared by the HTML pagination control
//! and the JSON API.

use serde::Serialize;

/// Number of page buttons rendered around the current page by default.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Returns the contiguous run of page numbers to render around `current_page`.
///
/// The result always has `min(max_visible_pages, total_pages)` entries, stays
/// inside `[1, total_pages]` and contains the (clamped) current page. When the
/// window touches either edge it is extended towards the other one. For even
/// window sizes the extra slot goes before the current page.
pub fn visible_pages(
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
) -> Vec<usize> {
    if total_pages == 0 || max_visible_pages == 0 {
        return vec![];
    }

    let current_page = sanitize_page(current_page, total_pages);
    let window = max_visible_pages.min(total_pages);
    let half = window / 2;

    let mut start = current_page.saturating_sub(half).max(1);
    let mut end = start + window - 1;

    if end > total_pages {
        end = total_pages;
        start = end + 1 - window;
    }

    (start..=end).collect()
}

/// Clamps a requested page into `[1, total_pages]`.
///
/// With an unknown or empty total the lower bound still applies.
pub fn sanitize_page(page: usize, total_pages: usize) -> usize {
    let page = page.max(1);
    if total_pages == 0 { page } else { page.min(total_pages) }
}

/// Boundary flags driving the first/previous/next/last buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    /// The "first" shortcut is hidden when page 1 is adjacent.
    pub show_first_button: bool,
    /// The "last" shortcut is hidden when the last page is adjacent.
    pub show_last_button: bool,
}

impl PaginationState {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            is_first_page: current_page == 1,
            is_last_page: current_page == total_pages,
            has_previous_page: current_page > 1,
            has_next_page: current_page < total_pages,
            show_first_button: current_page > 2,
            show_last_button: current_page + 1 < total_pages,
        }
    }
}

/// One-based, inclusive range of items shown on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRange {
    pub start_item: usize,
    pub end_item: usize,
}

impl ItemRange {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let current_page = current_page.max(1);
        Self {
            start_item: (current_page - 1) * items_per_page + 1,
            end_item: (current_page * items_per_page).min(total_items),
        }
    }
}

/// A page of items together with everything the pagination control needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub state: PaginationState,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        Self::with_window(items, current_page, total_pages, DEFAULT_MAX_VISIBLE_PAGES)
    }

    pub fn with_window(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        max_visible_pages: usize,
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = visible_pages(current_page, total_pages, max_visible_pages);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            state: PaginationState::new(current_page, total_pages),
        }
    }

    /// The control is only rendered when there is more than one page.
    pub fn is_navigable(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_window_invariants(current: usize, total: usize, max: usize) {
        let pages = visible_pages(current, total, max);
        assert_eq!(pages.len(), max.min(total), "len for {current}/{total}/{max}");
        assert!(pages.contains(&current), "current in {pages:?}");
        assert!(pages.windows(2).all(|w| w[1] == w[0] + 1), "contiguous {pages:?}");
        assert!(pages.first().is_some_and(|&p| p >= 1));
        assert!(pages.last().is_some_and(|&p| p <= total));
    }

    #[test]
    fn window_invariants_hold_for_small_domains() {
        for total in 1..=12 {
            for max in 1..=9 {
                for current in 1..=total {
                    assert_window_invariants(current, total, max);
                }
            }
        }
    }

    #[test]
    fn window_is_centered_in_the_middle() {
        assert_eq!(visible_pages(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_extends_towards_the_end_near_start() {
        assert_eq!(visible_pages(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(2, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_extends_towards_the_start_near_end() {
        assert_eq!(visible_pages(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn even_window_keeps_the_requested_length() {
        assert_eq!(visible_pages(5, 10, 4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn window_covers_everything_when_max_exceeds_total() {
        assert_eq!(visible_pages(2, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn window_is_empty_without_pages() {
        assert!(visible_pages(1, 0, 5).is_empty());
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(visible_pages(42, 6, 3), vec![4, 5, 6]);
        assert_eq!(visible_pages(0, 6, 3), vec![1, 2, 3]);
    }

    #[test]
    fn state_on_first_page() {
        let state = PaginationState::new(1, 5);
        assert!(state.is_first_page);
        assert!(!state.has_previous_page);
        assert!(!state.show_first_button);
        assert!(state.show_last_button);
    }

    #[test]
    fn state_on_last_page() {
        let state = PaginationState::new(5, 5);
        assert!(state.is_last_page);
        assert!(!state.has_next_page);
        assert!(state.show_first_button);
        assert!(!state.show_last_button);
    }

    #[test]
    fn state_hides_shortcuts_next_to_edges() {
        let state = PaginationState::new(2, 3);
        assert!(!state.show_first_button);
        assert!(!state.show_last_button);
    }

    #[test]
    fn item_range_in_the_middle() {
        assert_eq!(
            ItemRange::new(3, 20, 200),
            ItemRange {
                start_item: 41,
                end_item: 60
            }
        );
    }

    #[test]
    fn item_range_end_clamps_to_total() {
        assert_eq!(
            ItemRange::new(10, 20, 195),
            ItemRange {
                start_item: 181,
                end_item: 195
            }
        );
    }

    #[test]
    fn sanitize_page_clamps_both_ends() {
        assert_eq!(sanitize_page(0, 4), 1);
        assert_eq!(sanitize_page(9, 4), 4);
        assert_eq!(sanitize_page(3, 4), 3);
        assert_eq!(sanitize_page(9, 0), 9);
    }

    #[test]
    fn paginated_treats_zero_as_first_page() {
        let paginated = Paginated::new(vec!["a"], 0, 3);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![1, 2, 3]);
        assert!(paginated.is_navigable());
    }

    #[test]
    fn single_page_is_not_navigable() {
        let paginated = Paginated::new(vec!["a"], 1, 1);
        assert!(!paginated.is_navigable());
    }

    #[test]
    fn state_and_range_serialize_in_camel_case() {
        let state = serde_json::to_value(PaginationState::new(1, 5)).unwrap();
        assert_eq!(state["isFirstPage"], true);
        assert_eq!(state["showLastButton"], true);

        let range = serde_json::to_value(ItemRange::new(3, 20, 200)).unwrap();
        assert_eq!(range, serde_json::json!({"startItem": 41, "endItem": 60}));
    }
}
