//! Post browser state: the fetched list, the search query, and the current page.
//!
//! The filtered list is recomputed whenever the query or the source list
//! changes, and both of those reset the page to 1.

use crate::{
    error::FetchError,
    pagination::{self, PAGE_SIZE},
    post::{Post, filter_posts},
};

/// State behind a post browser view.
#[derive(Debug, Clone, PartialEq)]
pub struct PostBrowserState {
    posts: Vec<Post>,
    filtered: Vec<Post>,
    query: String,
    page: usize,
    page_size: usize,
    loading: bool,
    error: Option<String>,
}

impl Default for PostBrowserState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PostBrowserState {
    /// Create an empty browser with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            posts: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            loading: false,
            error: None,
        }
    }

    /// Mark the fetch as in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the source list with freshly fetched posts.
    pub fn load_succeeded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.error = None;
        self.loading = false;
        self.refilter();
    }

    /// Record a failed fetch. Previously loaded posts are kept.
    pub fn load_failed(&mut self, error: &FetchError) {
        self.error = Some(error.to_string());
        self.loading = false;
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Advance one page, stopping at the last.
    pub fn next_page(&mut self) {
        self.page = pagination::clamp_page(self.page + 1, self.page_count());
    }

    /// Go back one page, stopping at the first.
    pub fn previous_page(&mut self) {
        self.page = pagination::clamp_page(self.page.saturating_sub(1), self.page_count());
    }

    fn refilter(&mut self) {
        self.filtered = filter_posts(&self.posts, &self.query);
        self.page = 1;
    }

    /// All fetched posts.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts matching the current query.
    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    /// Posts shown on the current page.
    pub fn page_slice(&self) -> &[Post] {
        pagination::page_slice(&self.filtered, self.page, self.page_size)
    }

    /// Number of pages for the filtered list, at least one.
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered.len(), self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the "Previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether the "Next" control is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Whether the "No posts found." notice applies.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.page_slice().is_empty()
    }
}
