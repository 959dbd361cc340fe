use super::page_target::PageTarget;
use super::pagination::PaginationState;
use crate::suggestion::SuggestionRecord;

/// Suggestion list paginator
///
/// Records are kept newest first. Duplicate ids are kept as-is; lookups by
/// id resolve to the first (newest) match.
#[derive(Debug, Clone, Default)]
pub struct SuggestionFeed {
    records: Vec<SuggestionRecord>,
    pagination: PaginationState,
}

impl SuggestionFeed {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            pagination: PaginationState::new(page_size),
        }
    }

    /// Create a feed over records already ordered newest first
    pub fn with_records(page_size: usize, records: Vec<SuggestionRecord>) -> Self {
        Self {
            records,
            pagination: PaginationState::new(page_size),
        }
    }

    /// Insert a new suggestion at the top and return to the first page
    pub fn prepend(&mut self, record: SuggestionRecord) {
        log::debug!("Prepending suggestion {}", record.id);
        self.records.insert(0, record);
        self.pagination.reset();
    }

    /// Replace the whole collection (e.g. after the initial load)
    pub fn load(&mut self, records: Vec<SuggestionRecord>) {
        self.records = records;
        self.pagination.reset();
    }

    /// Mark the first record with a matching id as executed
    ///
    /// Ids are compared in their string form. Returns false (and changes
    /// nothing) when no record matches.
    pub fn mark_executed(&mut self, id: &str) -> bool {
        match self.records.iter_mut().find(|r| r.id.as_str() == id) {
            Some(record) => {
                record.executed = true;
                true
            }
            None => {
                log::debug!("No suggestion with id {} to mark executed", id);
                false
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&SuggestionRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Records on the current page
    pub fn current_page_items(&self) -> &[SuggestionRecord] {
        &self.records[self.pagination.window(self.records.len())]
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.records.len())
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    /// Move to a page, clamped to the valid range
    pub fn go_to_page(&mut self, target: PageTarget) {
        let page = target.resolve(self.current_page(), self.total_pages());
        self.pagination.go_to(page, self.records.len());
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size, self.records.len());
    }

    /// 0-based absolute index of the first record on the current page
    pub(super) fn page_start(&self) -> usize {
        self.pagination.window(self.records.len()).start
    }

    pub fn records(&self) -> &[SuggestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "feed_state_tests.rs"]
mod feed_state_tests;
