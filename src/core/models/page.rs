use std::fmt;

use crate::core::models::filter::QueryMode;
use crate::core::models::log_entry::LogEntry;

/// Generation counter for the authoritative query.
///
/// Bumped exactly once per filter change, page-size change or refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    #[cfg(test)]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bounded request handed from the controller to a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub epoch: Epoch,
    pub query: QueryMode,
    /// Zero-based page index as the server counts it.
    pub page_index: usize,
    pub page_size: usize,
}

impl FetchRequest {
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }

    /// One-based page number as the view counts it.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }
}

/// An offset-addressed batch of entries tagged with the epoch it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub epoch: Epoch,
    pub offset: usize,
    pub entries: Vec<LogEntry>,
    /// Fewer entries than requested: nothing exists past this page.
    pub is_short: bool,
}

impl Page {
    /// Build the page answering `request`, deriving `is_short` from the count.
    pub fn for_request(request: &FetchRequest, entries: Vec<LogEntry>) -> Self {
        let is_short = entries.len() < request.page_size;
        Self {
            epoch: request.epoch,
            offset: request.offset(),
            entries,
            is_short,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
