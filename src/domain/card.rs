use serde::{Deserialize, Serialize};

/// A catalog card as rendered in the grid and on the detail page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    pub set_code: Option<String>,
    pub set_name: Option<String>,
    pub text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
}

impl Card {
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Power/toughness pair for creatures, e.g. `3/4`.
    pub fn stats(&self) -> Option<String> {
        match (&self.power, &self.toughness) {
            (Some(power), Some(toughness)) => Some(format!("{power}/{toughness}")),
            _ => None,
        }
    }
}

/// Rewrites plain-HTTP image links to HTTPS.
pub fn secure_image_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Filters forwarded to the catalog alongside pagination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFilters {
    pub name: Option<String>,
    pub set: Option<String>,
    /// Comma-separated color names, as the catalog expects.
    pub colors: Option<String>,
    pub rarity: Option<String>,
    pub type_line: Option<String>,
}

impl CardFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Full request tuple for one page of cards. Also the cache key, so two
/// different pages or page sizes never share a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardQuery {
    pub page: usize,
    pub page_size: usize,
    pub filters: CardFilters,
}

impl CardQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            filters: CardFilters::default(),
        }
    }

    #[must_use]
    pub fn filters(mut self, filters: CardFilters) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn set(mut self, set: impl Into<String>) -> Self {
        self.filters.set = Some(set.into());
        self
    }

    /// Query parameters in the catalog's wire names.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        let filters = [
            ("name", &self.filters.name),
            ("set", &self.filters.set),
            ("colors", &self.filters.colors),
            ("rarity", &self.filters.rarity),
            ("type", &self.filters.type_line),
        ];
        params.extend(
            filters
                .into_iter()
                .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone()))),
        );
        params
    }
}
