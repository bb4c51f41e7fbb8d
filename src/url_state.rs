//! Pagination state mirrored into the query string of a [`Location`].
//!
//! The store is the only writer of the `page`/`pageSize` parameters. Every
//! write re-reads the current query string and merges into it, so filter
//! parameters owned by other parts of the page survive page changes.

use url::form_urlencoded;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Query-string access for the page the store lives on.
///
/// `search` is the query without the leading `?`.
pub trait Location {
    fn search(&self) -> String;

    /// Records a new history entry pointing at `search` without reloading.
    fn push_search(&mut self, search: &str);
}

/// History kept in memory. Used when rendering links for a request and in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    entries: Vec<String>,
}

impl MemoryLocation {
    pub fn new(search: impl Into<String>) -> Self {
        let search = search.into();
        let search = search.strip_prefix('?').unwrap_or(&search).to_string();
        Self {
            entries: vec![search],
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.entries.last().cloned().unwrap_or_default()
    }

    fn push_search(&mut self, search: &str) {
        self.entries.push(search.to_string());
    }
}

/// Names of the query parameters the store owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames {
    pub page: String,
    pub page_size: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            page: "page".to_string(),
            page_size: "pageSize".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub default_page: usize,
    pub default_page_size: usize,
    pub param_names: ParamNames,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
            param_names: ParamNames::default(),
        }
    }
}

/// Reads a positive integer parameter.
///
/// Missing or non-numeric values yield `default`; zero and negative numbers
/// clamp to 1. The whole value must be an integer: `2.7` or `5abc` are
/// treated as non-numeric rather than truncated to a leading number.
fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(value)) if value < 1 => 1,
        Some(Ok(value)) => usize::try_from(value).unwrap_or(default),
        _ => default,
    }
}

fn parse_pairs(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(search.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Page and page-size state bound to a [`Location`].
#[derive(Debug)]
pub struct PaginationUrlStore<L: Location> {
    location: L,
    names: ParamNames,
    current_page: usize,
    page_size: usize,
}

impl<L: Location> PaginationUrlStore<L> {
    pub fn new(location: L) -> Self {
        Self::with_options(location, StoreOptions::default())
    }

    pub fn with_options(location: L, options: StoreOptions) -> Self {
        let pairs = parse_pairs(&location.search());
        let current_page = parse_positive(
            lookup(&pairs, &options.param_names.page),
            options.default_page.max(1),
        );
        let page_size = parse_positive(
            lookup(&pairs, &options.param_names.page_size),
            options.default_page_size.max(1),
        );

        Self {
            location,
            names: options.param_names,
            current_page,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn into_location(self) -> L {
        self.location
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        self.write();
    }

    /// Changing the density invalidates the current offset, so the page
    /// resets to 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
        self.write();
    }

    pub fn set_page_and_size(&mut self, page: usize, size: usize) {
        self.current_page = page.max(1);
        self.page_size = size.max(1);
        self.write();
    }

    /// Link that [`Self::set_page`] would navigate to.
    pub fn href_for_page(&self, page: usize) -> String {
        format!("?{}", self.merged_search(page.max(1), self.page_size))
    }

    /// Link that [`Self::set_page_size`] would navigate to.
    pub fn href_for_page_size(&self, size: usize) -> String {
        format!("?{}", self.merged_search(1, size.max(1)))
    }

    fn merged_search(&self, page: usize, size: usize) -> String {
        let mut pairs = parse_pairs(&self.location.search());
        upsert(&mut pairs, &self.names.page, page);
        upsert(&mut pairs, &self.names.page_size, size);

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter())
            .finish()
    }

    fn write(&mut self) {
        let search = self.merged_search(self.current_page, self.page_size);
        if search != self.location.search() {
            log::debug!("Pushing pagination state: ?{search}");
            self.location.push_search(&search);
        }
    }
}

/// Replaces the first occurrence of `name` and drops duplicates, or appends.
fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: usize) {
    let value = value.to_string();
    let mut seen = false;
    pairs.retain_mut(|(key, existing)| {
        if key != name {
            return true;
        }
        if seen {
            return false;
        }
        seen = true;
        *existing = value.clone();
        true
    });
    if !seen {
        pairs.push((name.to_string(), value));
    }
}
