use serde::{Deserialize, Serialize};

/// One artwork row as the remote API delivers it.
///
/// Identity is the `id` field; the rest are display attributes the core
/// never interprets. The live service returns `null` for most attributes
/// on plenty of records, hence the `Option`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

/// Shape of the full dataset, as reported alongside every page.
///
/// Field names are part of the wire contract and must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total row count across all pages.
    pub total: u64,
    /// Page size.
    pub limit: usize,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

impl Pagination {
    /// Describe a dataset of `total` rows served in pages of `limit`.
    pub fn for_dataset(total: u64, limit: usize) -> Self {
        let safe_limit = limit.max(1);
        Self {
            total,
            limit: safe_limit,
            total_pages: (total as usize).div_ceil(safe_limit),
        }
    }
}

/// One server-delivered chunk of rows plus dataset metadata.
///
/// This mirrors the remote response body: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// An already-loaded page, anchored at a zero-based index.
///
/// This is the immutable "current page" value that selection requests are
/// anchored at. The `pagination` snapshot is the one seen when the page was
/// fetched; the design treats it as valid for the lifetime of the view.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Zero-based page index.
    pub index: usize,
    pub artworks: Vec<Artwork>,
    pub pagination: Pagination,
}

impl PageView {
    pub fn new(index: usize, page: Page) -> Self {
        Self {
            index,
            artworks: page.data,
            pagination: page.pagination,
        }
    }
}

/// How a selection request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The requested count was reached.
    Complete,
    /// The dataset ran out of pages first. Still a success, not an error.
    Partial,
}

/// The finalized result of one selection request.
///
/// Always a prefix, in page order, of the dataset starting at the anchor
/// page. Replaces any previous selection; never merged with one.
#[derive(Debug, Clone)]
pub struct Selection {
    pub artworks: Vec<Artwork>,
    pub outcome: SelectionOutcome,
    /// The normalized row count that was asked for.
    pub requested: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}
