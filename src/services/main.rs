use crate::catalog::CatalogReader;
use crate::domain::card::CardFilters;
use crate::dto::main::{IndexPageData, PageLink, PaginationNav};
use crate::models::browse::BrowseSettings;
use crate::pagination::{ItemRange, Paginated};
use crate::services::resolve_query;
use crate::ui::dropdown::{Dropdown, DropdownOption, DropdownView, OptionValue};
use crate::url_state::{Location, PaginationUrlStore};

pub const PAGE_SIZE_SELECTOR_ID: &str = "page-size-selector";
pub const PAGE_SIZE_SELECTOR_LABEL: &str = "Items per page:";

/// Loads the card grid for the main index page.
///
/// A catalog failure does not fail the page: the error is reported in
/// [`IndexPageData::error`] and the last good list for the same query (or an
/// empty one) is shown instead.
pub async fn load_index_page<C, L>(
    catalog: &C,
    store: &PaginationUrlStore<L>,
    filters: CardFilters,
    settings: &BrowseSettings,
) -> IndexPageData
where
    C: CatalogReader + ?Sized,
    L: Location,
{
    let (query, total_pages) = resolve_query(store, filters, settings);

    let (cards, error) = match catalog.list_cards(&query).await {
        Ok(cards) => (cards, None),
        Err(err) => {
            log::error!("Failed to load cards: {err}");
            let cards = catalog.last_good_cards(&query).unwrap_or_default();
            (cards, Some(format!("Error loading cards: {err}")))
        }
    };

    let cards = Paginated::with_window(
        cards,
        query.page,
        total_pages,
        settings.max_visible_pages,
    );

    // Nothing to page through: the grid shows its empty state on its own.
    let (summary, navigation) = if cards.items.is_empty() {
        (None, None)
    } else {
        (
            Some(summary(
                query.page,
                query.page_size,
                total_pages,
                settings.estimated_total_items,
            )),
            cards.is_navigable().then(|| navigation(&cards, store)),
        )
    };
    let page_size_selector = page_size_selector(store, settings);

    IndexPageData {
        cards,
        summary,
        navigation,
        page_size_selector,
        error,
        filters: query.filters,
    }
}

fn summary(page: usize, page_size: usize, total_pages: usize, total_items: usize) -> String {
    if total_items == 0 {
        return format!("Page {page} of {total_pages}");
    }
    let range = ItemRange::new(page, page_size, total_items);
    format!(
        "Showing {}-{} of {} results",
        range.start_item,
        range.end_item,
        group_thousands(total_items)
    )
}

/// Formats `1234567` as `1,234,567`.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn navigation<T, L: Location>(
    cards: &Paginated<T>,
    store: &PaginationUrlStore<L>,
) -> PaginationNav {
    let page = cards.page;
    let state = cards.state;
    let link = |target: usize, label: String, aria_label: Option<&str>, disabled: bool| PageLink {
        label,
        href: store.href_for_page(target),
        aria_label: aria_label.map(str::to_string),
        active: false,
        disabled,
    };

    PaginationNav {
        first: state
            .show_first_button
            .then(|| link(1, "«".to_string(), Some("Go to first page"), false)),
        previous: link(
            page.saturating_sub(1).max(1),
            "‹".to_string(),
            Some("Go to previous page"),
            state.is_first_page,
        ),
        pages: cards
            .pages
            .iter()
            .map(|&number| PageLink {
                active: number == page,
                ..link(number, number.to_string(), None, false)
            })
            .collect(),
        next: link(
            (page + 1).min(cards.total_pages),
            "›".to_string(),
            Some("Go to next page"),
            state.is_last_page,
        ),
        last: state.show_last_button.then(|| {
            link(
                cards.total_pages,
                "»".to_string(),
                Some("Go to last page"),
                false,
            )
        }),
    }
}

fn page_size_selector<L: Location>(
    store: &PaginationUrlStore<L>,
    settings: &BrowseSettings,
) -> DropdownView {
    let current = store.page_size();
    let options = settings
        .page_size_options
        .iter()
        .map(|&size| DropdownOption::new(size, size.to_string()))
        .collect();

    Dropdown::new(options, Some(OptionValue::from(current)))
        .with_placeholder(current.to_string())
        .view(PAGE_SIZE_SELECTOR_ID, PAGE_SIZE_SELECTOR_LABEL, |value| {
            let size = match value {
                OptionValue::Number(n) => usize::try_from(*n).unwrap_or(current),
                OptionValue::Text(s) => s.parse().unwrap_or(current),
            };
            store.href_for_page_size(size)
        })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::catalog::CatalogError;
    use crate::catalog::mock::MockCatalog;
    use crate::domain::card::{Card, CardQuery};
    use crate::url_state::MemoryLocation;

    fn cards(count: usize) -> Vec<Card> {
        (1..=count)
            .map(|i| Card {
                id: format!("id-{i}"),
                name: format!("Card {i}"),
                image_url: Some(format!("https://img.example/{i}.png")),
                ..Card::default()
            })
            .collect()
    }

    fn store(search: &str) -> PaginationUrlStore<MemoryLocation> {
        PaginationUrlStore::new(MemoryLocation::new(search))
    }

    #[tokio::test]
    async fn requests_the_store_page_with_default_set() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_list_cards()
            .with(function(|query: &CardQuery| {
                query.page == 3
                    && query.page_size == 20
                    && query.filters.set.as_deref() == Some("dmu")
            }))
            .times(1)
            .returning(|_| Ok(cards(20)));
        catalog.expect_last_good_cards().times(0);

        let data = load_index_page(
            &catalog,
            &store("page=3&pageSize=20"),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        assert_eq!(data.error, None);
        assert_eq!(data.cards.items.len(), 20);
        assert_eq!(data.cards.page, 3);
        assert_eq!(data.cards.pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(data.summary.as_deref(), Some("Showing 41-60 of 300 results"));
    }

    #[tokio::test]
    async fn failure_keeps_last_good_list_and_reports_error() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().times(1).returning(|_| {
            Err(CatalogError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            })
        });
        catalog
            .expect_last_good_cards()
            .times(1)
            .returning(|_| Some(cards(2)));

        let data = load_index_page(
            &catalog,
            &store(""),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        assert_eq!(data.cards.items.len(), 2);
        let error = data.error.expect("error message");
        assert!(error.starts_with("Error loading cards:"));
        assert!(error.contains("503"));
    }

    #[tokio::test]
    async fn failure_on_first_load_shows_an_empty_list() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_list_cards()
            .returning(|_| Err(CatalogError::NotFound));
        catalog.expect_last_good_cards().returning(|_| None);

        let data = load_index_page(
            &catalog,
            &store(""),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        assert!(data.cards.items.is_empty());
        assert!(data.error.is_some());
        assert!(data.navigation.is_none());
        assert_eq!(data.summary, None);
    }

    #[tokio::test]
    async fn empty_listing_has_no_summary_or_navigation() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().returning(|_| Ok(vec![]));
        catalog.expect_last_good_cards().times(0);

        let data = load_index_page(
            &catalog,
            &store("page=4&pageSize=20"),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        assert_eq!(data.error, None);
        assert!(data.navigation.is_none());
        assert_eq!(data.summary, None);
    }

    #[tokio::test]
    async fn navigation_links_preserve_filters() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().returning(|_| Ok(cards(10)));

        let filters = CardFilters {
            set: Some("bro".to_string()),
            ..CardFilters::default()
        };
        let data = load_index_page(
            &catalog,
            &store("set=bro&page=5&pageSize=10"),
            filters,
            &BrowseSettings::default(),
        )
        .await;

        let nav = data.navigation.expect("navigation");
        assert_eq!(nav.previous.href, "?set=bro&page=4&pageSize=10");
        assert_eq!(nav.next.href, "?set=bro&page=6&pageSize=10");
        assert_eq!(
            nav.first.expect("first shortcut").href,
            "?set=bro&page=1&pageSize=10"
        );
        assert_eq!(nav.last.expect("last shortcut").href, "?set=bro&page=30&pageSize=10");
        let active: Vec<_> = nav.pages.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "5");
    }

    #[tokio::test]
    async fn first_page_disables_previous_and_hides_first() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().returning(|_| Ok(cards(20)));

        let data = load_index_page(
            &catalog,
            &store(""),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        let nav = data.navigation.expect("navigation");
        assert!(nav.previous.disabled);
        assert!(nav.first.is_none());
        assert!(nav.last.is_some());
        assert!(!nav.next.disabled);
    }

    #[tokio::test]
    async fn single_page_has_no_navigation() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().returning(|_| Ok(cards(3)));
        let settings = BrowseSettings {
            estimated_total_items: 15,
            ..BrowseSettings::default()
        };

        let data = load_index_page(&catalog, &store(""), CardFilters::default(), &settings).await;

        assert!(data.navigation.is_none());
        assert_eq!(data.summary.as_deref(), Some("Showing 1-15 of 15 results"));
    }

    #[tokio::test]
    async fn page_size_options_reset_to_first_page() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list_cards().returning(|_| Ok(cards(20)));

        let data = load_index_page(
            &catalog,
            &store("page=5&pageSize=20"),
            CardFilters::default(),
            &BrowseSettings::default(),
        )
        .await;

        let selector = data.page_size_selector;
        assert_eq!(selector.display_label, "20");
        let hrefs: Vec<_> = selector
            .options
            .iter()
            .map(|o| o.href.clone().unwrap_or_default())
            .collect();
        assert_eq!(
            hrefs,
            vec![
                "?page=1&pageSize=10",
                "?page=1&pageSize=20",
                "?page=1&pageSize=30",
                "?page=1&pageSize=50"
            ]
        );
        assert!(selector.options[1].selected);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(300), "300");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn summary_without_totals_names_the_page() {
        assert_eq!(summary(2, 20, 0, 0), "Page 2 of 0");
    }
}
