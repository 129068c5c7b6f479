use shared_types::{normalize_pagination, ListParams, Paginated};

/// Render list params as a query string (`?page=..&page_size=..&..`).
/// Returns an empty string when nothing is set, so callers can append
/// unconditionally.
pub fn query_string(params: &ListParams) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(page) = params.page {
        parts.push(format!("page={}", page));
    }
    if let Some(page_size) = params.page_size {
        parts.push(format!("page_size={}", page_size));
    }
    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("search={}", urlencoding::encode(search)));
    }
    if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("status={}", urlencoding::encode(status)));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Stateful pager shared by every list screen flow.
///
/// Tracks page position and filter state, absorbs fetched pages, and
/// appends results load-more style. Changing the page size or any
/// filter resets accumulated rows so a refetch never duplicates them.
#[derive(Debug, Clone)]
pub struct PageCursor<T> {
    page: i64,
    page_size: i64,
    search: Option<String>,
    status: Option<String>,
    pub items: Vec<T>,
    pub count: i64,
    exhausted: bool,
}

impl<T> PageCursor<T> {
    pub fn new(page_size: i64) -> Self {
        let (page, page_size) = normalize_pagination(None, Some(page_size));
        Self {
            page,
            page_size,
            search: None,
            status: None,
            items: Vec::new(),
            count: 0,
            exhausted: false,
        }
    }

    /// Params for the next page to request.
    pub fn next_params(&self) -> ListParams {
        let mut params = ListParams::default().page(self.page).page_size(self.page_size);
        if let Some(search) = &self.search {
            params = params.search(search.clone());
        }
        if let Some(status) = &self.status {
            params = params.status(status.clone());
        }
        params
    }

    /// Fold a fetched page into the cursor and advance.
    pub fn absorb(&mut self, page: Paginated<T>) {
        self.count = page.count;
        self.exhausted = !page.has_next();
        self.items.extend(page.results);
        self.page += 1;
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.is_empty());
        self.reset();
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status.filter(|s| !s.is_empty());
        self.reset();
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        let (_, page_size) = normalize_pagination(None, Some(page_size));
        self.page_size = page_size;
        self.reset();
    }

    fn reset(&mut self) {
        self.page = 1;
        self.items.clear();
        self.count = 0;
        self.exhausted = false;
    }
}
