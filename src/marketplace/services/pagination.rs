use serde_json::json;

/// Page size requested when listing products
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on pages fetched by a single listing
pub const DEFAULT_MAX_PAGES: u32 = 500;

/// Page cursor sent as the JSON-encoded `pagination` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn first_page(page_size: u32) -> Self {
        Self { page: 1, page_size }
    }

    /// The cursor as the marketplace expects it: `{"page":1,"pagesize":20}`
    pub fn to_query_value(&self) -> String {
        json!({
            "page": self.page,
            "pagesize": self.page_size,
        })
        .to_string()
    }

    /// Appends the cursor to `url`, which may already carry a query string
    pub fn apply(&self, url: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}pagination={}",
            url,
            separator,
            urlencoding::encode(&self.to_query_value())
        )
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first_page(DEFAULT_PAGE_SIZE)
    }
}

/// Collects items across pages until the server-reported total is reached.
///
/// The total starts at 1 so the first page is always requested, and is
/// replaced by whatever each page reports. An empty page also ends the
/// listing, since asking again would return the same nothing.
#[derive(Debug)]
pub struct PageAccumulator<T> {
    items: Vec<T>,
    expected_total: usize,
    pages_fetched: u32,
    max_pages: u32,
    exhausted: bool,
}

impl<T> PageAccumulator<T> {
    pub fn new(max_pages: u32) -> Self {
        Self {
            items: Vec::new(),
            expected_total: 1,
            pages_fetched: 0,
            max_pages,
            exhausted: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.exhausted || self.items.len() >= self.expected_total
    }

    /// True once `max_pages` pages were fetched without completing
    pub fn limit_reached(&self) -> bool {
        !self.is_complete() && self.pages_fetched >= self.max_pages
    }

    pub fn record_page(&mut self, reported_total: usize, page: Vec<T>) {
        self.pages_fetched += 1;
        self.expected_total = reported_total;
        if page.is_empty() {
            self.exhausted = true;
        }
        self.items.extend(page);
    }

    pub fn fetched(&self) -> usize {
        self.items.len()
    }

    pub fn expected_total(&self) -> usize {
        self.expected_total
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
