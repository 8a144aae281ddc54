//! Page bookkeeping for the expanded candidate view.
//!
//! Pages are variable length: how many candidates fit depends on their
//! widths, so the start of page N is only known after page N-1 has been laid
//! out. The pager therefore remembers where every page it has shown began
//! and replays those offsets when paging backward instead of recomputing them.

use crate::layout::PageLayout;

/// Current page, the start offset of every page seen so far, and the point
/// the next page resumes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    /// Current page index (0-based)
    page: usize,

    /// Start index of each page shown, keyed by page index
    page_starts: Vec<usize>,

    /// First candidate not on the current page
    next_start: usize,

    /// Total number of candidates being paged through
    total: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current page index (0-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Start index of the page currently displayed.
    pub fn page_start(&self) -> usize {
        self.page_starts.get(self.page).copied().unwrap_or(0)
    }

    /// Start index recorded for an earlier (or the current) page.
    pub fn start_of(&self, page: usize) -> Option<usize> {
        self.page_starts.get(page).copied()
    }

    /// Index the next page will begin at.
    pub fn next_start(&self) -> usize {
        self.next_start
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages whose start offset is known.
    pub fn pages_seen(&self) -> usize {
        self.page_starts.len()
    }

    pub fn has_next(&self) -> bool {
        self.next_start < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Record that the current page was laid out as `layout`.
    pub fn record(&mut self, layout: &PageLayout, total: usize) {
        if self.page < self.page_starts.len() {
            self.page_starts[self.page] = layout.start;
        } else {
            // Pages are only ever entered one step past the last one seen.
            self.page_starts.resize(self.page, layout.start);
            self.page_starts.push(layout.start);
        }
        self.next_start = layout.next_start;
        self.total = total;
    }

    /// Move to the next page, returning its start index.
    /// Returns `None` (and changes nothing) when every candidate has been shown.
    pub fn advance(&mut self) -> Option<usize> {
        // A page that showed nothing cannot lead anywhere new.
        if !self.has_next() || self.next_start <= self.page_start() {
            return None;
        }
        self.page += 1;
        Some(self.next_start)
    }

    /// Move to the previous page, returning its recorded start index.
    /// Returns `None` (and changes nothing) on the first page.
    pub fn retreat(&mut self) -> Option<usize> {
        if !self.has_previous() {
            return None;
        }
        self.page -= 1;
        Some(self.page_starts.get(self.page).copied().unwrap_or(0))
    }

    /// Forget all pages and return to page 0.
    pub fn reset(&mut self) {
        self.page = 0;
        self.page_starts.clear();
        self.next_start = 0;
        self.total = 0;
    }
}
