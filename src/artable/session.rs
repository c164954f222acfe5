//! Stateful table session: the boundary a UI drives.
//!
//! A session tracks the current page and the stored selection the way a
//! table widget would, while keeping all inputs and outputs plain values.
//! Methods take `&mut self`, so at most one page load or selection run is
//! ever in flight per session: a new request can only start after the
//! previous one resolved, which is exactly the serialization the design
//! calls for.

use crate::api::ArtableApi;
use crate::commands::CmdMessage;
use crate::error::{ArtableError, Result};
use crate::fetch::PageFetcher;
use crate::model::{PageView, Selection};

/// Presentation status of the page-load path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Ready,
    Error(String),
}

pub struct TableSession<F: PageFetcher> {
    api: ArtableApi<F>,
    view: Option<PageView>,
    selection: Option<Selection>,
    status: SessionStatus,
    messages: Vec<CmdMessage>,
}

impl<F: PageFetcher> TableSession<F> {
    pub fn new(api: ArtableApi<F>) -> Self {
        Self {
            api,
            view: None,
            selection: None,
            status: SessionStatus::Ready,
            messages: Vec::new(),
        }
    }

    /// Navigate to a page: fetch it and replace the current page view.
    ///
    /// On failure the previous view is kept and the error is also recorded
    /// in [`status`](Self::status) for inline presentation.
    pub async fn set_page(&mut self, page_zero_based: usize) -> Result<&PageView> {
        let known_total = self.view.as_ref().map(|v| v.pagination.total_pages);

        match self.api.load_page(page_zero_based, known_total).await {
            Ok(result) => {
                let view = result
                    .page
                    .ok_or_else(|| ArtableError::Api("Load returned no page".into()))?;
                self.status = SessionStatus::Ready;
                self.messages = result.messages;
                Ok(self.view.insert(view))
            }
            Err(e) => {
                self.status = SessionStatus::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Run a selection request anchored at the current page and replace the
    /// stored selection with the result.
    ///
    /// A failed run leaves the previously stored selection untouched, so an
    /// error never silently clears what the user already selected.
    pub async fn request_selection(&mut self, requested: Option<i64>) -> Result<&Selection> {
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| ArtableError::Api("No page loaded".into()))?;

        let result = self.api.select_rows(view, requested).await?;
        let selection = result
            .selection
            .ok_or_else(|| ArtableError::Api("Selection returned no rows".into()))?;

        self.messages = result.messages;
        Ok(self.selection.insert(selection))
    }

    pub fn view(&self) -> Option<&PageView> {
        self.view.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Messages produced by the most recent operation (e.g. the partial
    /// outcome warning).
    pub fn messages(&self) -> &[CmdMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::memory::InMemoryFetcher;
    use crate::model::SelectionOutcome;

    fn session(fetcher: InMemoryFetcher) -> TableSession<InMemoryFetcher> {
        TableSession::new(ArtableApi::new(fetcher))
    }

    #[tokio::test]
    async fn set_page_replaces_the_current_view() {
        let mut session = session(InMemoryFetcher::with_dataset(57, 12));

        session.set_page(0).await.unwrap();
        assert_eq!(session.view().unwrap().artworks[0].id, 1);

        session.set_page(2).await.unwrap();
        assert_eq!(session.view().unwrap().artworks[0].id, 25);
        assert_eq!(*session.status(), SessionStatus::Ready);
    }

    #[tokio::test]
    async fn navigation_is_bounded_once_the_page_count_is_known() {
        let mut session = session(InMemoryFetcher::with_dataset(57, 12));
        session.set_page(0).await.unwrap();

        let err = session.set_page(7).await.unwrap_err();
        assert!(matches!(err, ArtableError::PageOutOfRange { .. }));
        assert!(matches!(session.status(), SessionStatus::Error(_)));
        // The previous view survives a failed navigation.
        assert_eq!(session.view().unwrap().index, 0);
    }

    #[tokio::test]
    async fn selection_requires_a_loaded_page() {
        let mut session = session(InMemoryFetcher::with_dataset(57, 12));
        let err = session.request_selection(Some(5)).await.unwrap_err();
        assert!(matches!(err, ArtableError::Api(_)));
    }

    #[tokio::test]
    async fn selection_replaces_the_stored_selection() {
        let mut session = session(InMemoryFetcher::with_dataset(57, 12));
        session.set_page(0).await.unwrap();

        session.request_selection(Some(5)).await.unwrap();
        assert_eq!(session.selection().unwrap().len(), 5);

        session.request_selection(Some(20)).await.unwrap();
        let selection = session.selection().unwrap();
        assert_eq!(selection.len(), 20);
        assert_eq!(selection.outcome, SelectionOutcome::Complete);
    }

    #[tokio::test]
    async fn failed_selection_keeps_the_previous_one() {
        let fetcher = InMemoryFetcher::with_dataset(57, 12).failing_on_page(3);
        let mut session = session(fetcher);
        session.set_page(0).await.unwrap();

        session.request_selection(Some(5)).await.unwrap();
        let err = session.request_selection(Some(30)).await.unwrap_err();
        assert!(matches!(err, ArtableError::Selection { page: 3, .. }));

        // The earlier 5-row selection is still there.
        assert_eq!(session.selection().unwrap().len(), 5);
    }
}
