use super::PageFetcher;
use crate::error::{ArtableError, Result};
use crate::model::{Artwork, Page, Pagination};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned pages for testing and development.
/// Does NOT talk to the network.
///
/// Tracks how many fetches were issued so tests can assert the no-fetch
/// shortcut, and can be told to fail on a specific page to exercise the
/// atomic-failure path.
pub struct InMemoryFetcher {
    pages: Vec<Vec<Artwork>>,
    pagination: Pagination,
    fetches: AtomicUsize,
    fail_on_page: Option<usize>,
}

impl InMemoryFetcher {
    /// A dataset of `total` sequentially numbered artworks served in pages
    /// of `limit`.
    pub fn with_dataset(total: u64, limit: usize) -> Self {
        let artworks: Vec<Artwork> = (1..=total).map(sample_artwork).collect();
        let pages = artworks
            .chunks(limit.max(1))
            .map(|chunk| chunk.to_vec())
            .collect();

        Self {
            pages,
            pagination: Pagination::for_dataset(total, limit),
            fetches: AtomicUsize::new(0),
            fail_on_page: None,
        }
    }

    /// Make the fetch of the given one-based page fail.
    pub fn failing_on_page(mut self, page_one_based: usize) -> Self {
        self.fail_on_page = Some(page_one_based);
        self
    }

    /// Number of fetches issued so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

#[async_trait]
impl PageFetcher for InMemoryFetcher {
    async fn fetch_page(&self, page_one_based: usize) -> Result<Page> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_page == Some(page_one_based) {
            return Err(ArtableError::Api(format!(
                "injected failure fetching page {}",
                page_one_based
            )));
        }

        let data = self
            .pages
            .get(page_one_based.wrapping_sub(1))
            .cloned()
            .ok_or(ArtableError::PageOutOfRange {
                page: page_one_based,
                total_pages: self.pagination.total_pages,
            })?;

        Ok(Page {
            data,
            pagination: self.pagination,
        })
    }
}

/// A minimal artwork row for fixtures.
pub fn sample_artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: Some(format!("Artwork {}", id)),
        place_of_origin: None,
        artist_display: None,
        inscriptions: None,
        date_start: None,
        date_end: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_pages_and_counts_fetches() {
        let fetcher = InMemoryFetcher::with_dataset(25, 12);
        assert_eq!(fetcher.pagination().total_pages, 3);

        let page = fetcher.fetch_page(1).await.unwrap();
        assert_eq!(page.data.len(), 12);
        assert_eq!(page.data[0].id, 1);

        let page = fetcher.fetch_page(3).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 25);

        assert_eq!(fetcher.fetches(), 2);
    }

    #[tokio::test]
    async fn rejects_page_past_the_end() {
        let fetcher = InMemoryFetcher::with_dataset(25, 12);
        let err = fetcher.fetch_page(4).await.unwrap_err();
        assert!(matches!(
            err,
            ArtableError::PageOutOfRange { page: 4, total_pages: 3 }
        ));
    }
}
