//! Filtered, optionally paginated list state.
//!
//! DESIGN
//! ======
//! The view derives a [`ListQuery`] from this state and re-fetches whenever
//! the query changes. Each fetch takes a [`FetchTicket`]; only the response
//! holding the latest ticket is applied, so a slow response for an old filter
//! or page can never overwrite a newer one.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::net::types::Page;

/// Free-form key/value constraints sent as query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.insert(key.to_owned(), value.to_string());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 1-based page number and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Everything needed to issue one list fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Filters,
    /// `None` requests the full, unpaginated result set.
    pub page: Option<PageRequest>,
}

impl ListQuery {
    #[must_use]
    pub fn unpaginated(filters: Filters) -> Self {
        Self { filters, page: None }
    }

    /// Query-string pairs: filters, then `page` and `limit` when paginated.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self
            .filters
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<Vec<_>>();
        if let Some(PageRequest { page, limit }) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }
}

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Rows of the current page plus the controls that select it.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub total_pages: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    filters: Filters,
    page: u32,
    page_size: u32,
    unpaginated: bool,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::unpaginated(Filters::new())
    }
}

impl<T> ListState<T> {
    /// Paginated list starting at page 1.
    #[must_use]
    pub fn paginated(filters: Filters, page_size: u32) -> Self {
        Self {
            rows: Vec::new(),
            total_pages: None,
            loading: false,
            error: None,
            filters,
            page: 1,
            page_size: page_size.max(1),
            unpaginated: false,
            latest: 0,
        }
    }

    /// List that always fetches the full result set.
    #[must_use]
    pub fn unpaginated(filters: Filters) -> Self {
        Self { unpaginated: true, ..Self::paginated(filters, 1) }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn is_unpaginated(&self) -> bool {
        self.unpaginated
    }

    /// The query the current controls describe.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        let page = (!self.unpaginated).then_some(PageRequest { page: self.page, limit: self.page_size });
        ListQuery { filters: self.filters.clone(), page }
    }

    /// Replace the filter set. A change resets to page 1.
    pub fn set_filters(&mut self, filters: Filters) -> bool {
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        self.page = 1;
        true
    }

    /// Select page `page` (1-based). Range checks are left to the server.
    pub fn set_page(&mut self, page: u32) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Switch to unpaginated mode for the rest of this list's life.
    pub fn show_full_list(&mut self) {
        self.unpaginated = true;
    }

    /// Whether the page selector should be rendered.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        !self.unpaginated && self.total_pages.is_some_and(|n| n > 1)
    }

    /// Start a fetch: clears stale rows and hands out the newest ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.rows.clear();
        self.error = None;
        self.loading = true;
        FetchTicket(self.latest)
    }

    /// Apply a response. Responses for superseded tickets are dropped.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Page<T>, ApiError>) -> bool {
        if ticket.0 != self.latest {
            log::debug!("dropping stale list response {} (latest {})", ticket.0, self.latest);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.rows = page.rows;
                self.total_pages = page.total_pages;
                self.error = None;
            }
            Err(e) => {
                log::warn!("list fetch failed: {e}");
                self.rows.clear();
                self.error = Some(e.message());
            }
        }
        true
    }
}
