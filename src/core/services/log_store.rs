use std::collections::BTreeMap;

use crate::core::models::log_entry::LogEntry;
use crate::core::models::page::Page;

/// Locally known entries for one query, keyed by server offset.
///
/// Pages may arrive in any order, so entries live in a sparse map rather
/// than a dense vector. Indices that were never fetched are "not yet
/// loaded"; reads skip them and completeness checks report them so the
/// controller can backfill. Entries are kept in server order and never
/// re-sorted.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    items: BTreeMap<usize, LogEntry>,
    /// Offset one past the last entry, once a short page has revealed it.
    end: Option<usize>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `page.entries` at `page.offset..`, overwriting what is there.
    ///
    /// A short page marks the end of data for the lifetime of this store.
    /// The end sits right after the short page's last entry; an empty page
    /// past unloaded pages only bounds it, so the smallest bound seen wins.
    pub fn merge(&mut self, page: Page) {
        let offset = page.offset;
        let is_short = page.is_short;
        let count = page.entries.len();
        for (i, entry) in page.entries.into_iter().enumerate() {
            self.items.insert(offset + i, entry);
        }
        if is_short {
            let bound = offset + count;
            self.end = Some(self.end.map_or(bound, |end| end.min(bound)));
        }
    }

    /// Loaded entries on one-based page `page`, in offset order.
    ///
    /// Unloaded indices inside the range are skipped, never fetched here.
    pub fn slice_for_page(&self, page: usize, page_size: usize) -> Vec<&LogEntry> {
        match page_range(page, page_size) {
            Some((start, end)) => self.items.range(start..end).map(|(_, e)| e).collect(),
            None => Vec::new(),
        }
    }

    /// Total to report to a page-count driven view.
    ///
    /// Exact once the end is known; otherwise one page ahead so the view can
    /// offer a "next page".
    pub fn estimated_total(&self, page_size: usize) -> usize {
        if self.known_end() {
            self.len()
        } else {
            self.len() + page_size
        }
    }

    /// Number of pages implied by `estimated_total`.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.estimated_total(page_size).div_ceil(page_size)
    }

    /// Extent of the data: the known end, or the highest loaded offset plus
    /// one, whichever is further.
    pub fn len(&self) -> usize {
        let loaded = self.items.last_key_value().map(|(k, _)| k + 1).unwrap_or(0);
        self.end.map_or(loaded, |end| end.max(loaded))
    }

    /// Number of entries actually held (less than `len()` while gaps exist).
    pub fn loaded(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn known_end(&self) -> bool {
        self.end.is_some()
    }

    /// Offsets on `page` that still need a fetch.
    ///
    /// Once the end is known, offsets past it do not count as missing.
    pub fn missing_in_page(&self, page: usize, page_size: usize) -> Vec<usize> {
        let Some((start, mut end)) = page_range(page, page_size) else {
            return Vec::new();
        };
        if self.known_end() {
            end = end.min(self.len());
        }
        (start..end).filter(|i| !self.items.contains_key(i)).collect()
    }

    /// Whether `page` can be shown without a fetch.
    ///
    /// True when every slot is loaded, or when the end is known and the page
    /// is the trailing partial page with no holes before the end. Page 1 of
    /// an empty result counts as complete.
    pub fn is_page_complete(&self, page: usize, page_size: usize) -> bool {
        let Some((start, _)) = page_range(page, page_size) else {
            return false;
        };
        if self.known_end() && start >= self.len() {
            // nothing left to fetch; only page 1 of an empty result is showable
            return start == 0;
        }
        self.missing_in_page(page, page_size).is_empty()
    }

    /// Whether `page` starts beyond the known end of data.
    pub fn is_past_end(&self, page: usize, page_size: usize) -> bool {
        match page_range(page, page_size) {
            Some((start, _)) => self.known_end() && start >= self.len() && start > 0,
            None => false,
        }
    }
}

/// `[start, end)` offsets of one-based `page`, `None` for page 0 or size 0.
fn page_range(page: usize, page_size: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1).checked_mul(page_size)?;
    let end = start.checked_add(page_size)?;
    Some((start, end))
}
