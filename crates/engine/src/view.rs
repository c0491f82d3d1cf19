//! Search and pagination over the merged list.
//!
//! Pure functions plus a thin stateful shell mirroring what the archive
//! page keeps as component state: the merged records, the current query,
//! the current page, and the page size.

use crate::model::Record;

/// Records-per-page selector. A closed set — anything else is rejected at
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// The selectable sizes, in display order.
    pub const CHOICES: [usize; 5] = [25, 50, 100, 200, 500];

    pub fn new(size: usize) -> Option<Self> {
        Self::CHOICES.contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(50)
    }
}

/// Case-insensitive substring match against identifier, friend code, or
/// PUID. An empty query matches everything.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let lowered = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.identifier.to_lowercase().contains(&lowered)
                || r.friend_code.to_lowercase().contains(&lowered)
                || r.puid.to_lowercase().contains(&lowered)
        })
        .collect()
}

/// 1-indexed page slice. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 || size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + size).min(items.len());
    &items[start..end]
}

/// Stateful shell over the pure filter/page functions.
#[derive(Debug, Clone)]
pub struct RecordView {
    records: Vec<Record>,
    query: String,
    page: usize,
    page_size: PageSize,
}

impl RecordView {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            query: String::new(),
            page: 1,
            page_size: PageSize::default(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changing the query resets to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Changing the page size resets to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Move to `page` if it is within `1..=total_pages`. Out-of-range
    /// requests are refused with no state change and no error.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Records matching the current query.
    pub fn filtered(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.query)
    }

    /// Number of pages in the current filtered list (0 when empty).
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size.get())
    }

    /// The records on the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        let size = self.page_size.get();
        let start = (self.page - 1).saturating_mul(size);
        self.filtered().into_iter().skip(start).take(size).collect()
    }
}
