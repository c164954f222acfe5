use crate::commands::CmdResult;
use crate::error::{ArtableError, Result};
use crate::fetch::PageFetcher;
use crate::model::PageView;

/// Load a single page for navigation.
///
/// `page_zero_based` is the page the UI wants to show. When the caller
/// already knows the dataset's page count (from a previous load) it passes
/// that as `total_pages` and out-of-range requests are rejected before any
/// network traffic. On the very first load no bound is known yet and the
/// remote service's own bounds apply.
pub async fn run<F: PageFetcher>(
    fetcher: &F,
    page_zero_based: usize,
    total_pages: Option<usize>,
) -> Result<CmdResult> {
    if let Some(total_pages) = total_pages {
        if page_zero_based >= total_pages {
            return Err(ArtableError::PageOutOfRange {
                page: page_zero_based + 1,
                total_pages,
            });
        }
    }

    let page = fetcher.fetch_page(page_zero_based + 1).await?;
    let view = PageView::new(page_zero_based, page);

    Ok(CmdResult::default().with_page(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::memory::InMemoryFetcher;

    #[tokio::test]
    async fn load_builds_a_view_for_the_requested_page() {
        let fetcher = InMemoryFetcher::with_dataset(57, 12);

        let result = run(&fetcher, 1, None).await.unwrap();
        let view = result.page.unwrap();

        assert_eq!(view.index, 1);
        assert_eq!(view.artworks.len(), 12);
        assert_eq!(view.artworks[0].id, 13);
        assert_eq!(view.pagination.total_pages, 5);
    }

    #[tokio::test]
    async fn load_rejects_out_of_range_page_without_fetching() {
        let fetcher = InMemoryFetcher::with_dataset(57, 12);

        let err = run(&fetcher, 5, Some(5)).await.unwrap_err();
        assert!(matches!(
            err,
            ArtableError::PageOutOfRange { page: 6, total_pages: 5 }
        ));
        assert_eq!(fetcher.fetches(), 0);
    }
}
