//! History panel model: search filter plus fixed-size pages

use crate::client::HistoryEntry;
use crate::utils::truncate_chars;

pub const HISTORY_PAGE_SIZE: usize = 13;
pub const HISTORY_URL_MAX_CHARS: usize = 35;
pub const HISTORY_EMPTY_TEXT: &str = "No URL history yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    search: String,
    /// 1-based
    page: usize,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// One row as the history table shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub original_url: String,
    pub short_link: String,
    pub created: String,
    pub clicks: u64,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry, api_base: &str) -> Self {
        Self {
            original_url: truncate_chars(&entry.original_url, HISTORY_URL_MAX_CHARS),
            short_link: short_link(api_base, &entry.short_code),
            created: entry.created_date(),
            clicks: entry.click_count,
        }
    }
}

pub fn short_link(api_base: &str, short_code: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), short_code)
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// New search text always goes back to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.page = 1;
    }

    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.page = 1;
        }
    }

    pub fn filtered<'a>(&self, entries: &'a [HistoryEntry]) -> Vec<&'a HistoryEntry> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return entries.iter().collect();
        }
        entries
            .iter()
            .filter(|e| {
                e.original_url.to_lowercase().contains(&needle)
                    || e.short_code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Never less than 1, even with nothing to show
    pub fn total_pages(&self, entries: &[HistoryEntry]) -> usize {
        self.filtered(entries).len().div_ceil(HISTORY_PAGE_SIZE).max(1)
    }

    pub fn page_items<'a>(&self, entries: &'a [HistoryEntry]) -> Vec<&'a HistoryEntry> {
        let total = self.total_pages(entries);
        let page = self.page.clamp(1, total);
        self.filtered(entries)
            .into_iter()
            .skip((page - 1) * HISTORY_PAGE_SIZE)
            .take(HISTORY_PAGE_SIZE)
            .collect()
    }

    pub fn next_page(&mut self, entries: &[HistoryEntry]) {
        if self.page < self.total_pages(entries) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}
