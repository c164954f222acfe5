use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtableError, Result};
use crate::fetch::PageFetcher;
use crate::model::{PageView, Selection, SelectionOutcome};

/// Accumulate a selection of `requested` rows anchored at the current page.
///
/// Seeds the accumulator with the anchor page's rows, then fetches the
/// following pages one at a time, in page order and never past
/// `total_pages`, until the accumulator holds enough rows, and truncates to
/// the requested count. Fetches are awaited sequentially on purpose: correctness wants
/// strict page-order accumulation, and one in-flight request bounds the
/// load put on the remote service.
///
/// A `requested` value that is absent, zero, or negative substitutes the
/// page size. Running out of pages before reaching the count is a success
/// with a [`SelectionOutcome::Partial`] marker; a failed fetch fails the
/// whole request and no rows are returned.
pub async fn run<F: PageFetcher>(
    fetcher: &F,
    view: &PageView,
    requested: Option<i64>,
) -> Result<CmdResult> {
    let target = normalize_requested(requested, view.pagination.limit);

    let mut selected = view.artworks.clone();
    let mut next_page = view.index + 1;

    while selected.len() < target && next_page < view.pagination.total_pages {
        let page = fetcher
            .fetch_page(next_page + 1)
            .await
            .map_err(|source| ArtableError::Selection {
                page: next_page + 1,
                source: Box::new(source),
            })?;

        log::debug!(
            "accumulated page {}: +{} rows, {} of {} so far",
            next_page + 1,
            page.data.len(),
            selected.len() + page.data.len(),
            target
        );

        selected.extend(page.data);
        next_page += 1;
    }

    selected.truncate(target);

    let outcome = if selected.len() == target {
        SelectionOutcome::Complete
    } else {
        SelectionOutcome::Partial
    };

    let mut result = CmdResult::default();
    if outcome == SelectionOutcome::Partial {
        result.add_message(CmdMessage::warning(format!(
            "Dataset exhausted: returning {} of {} requested rows",
            selected.len(),
            target
        )));
    }

    Ok(result.with_selection(Selection {
        artworks: selected,
        outcome,
        requested: target,
    }))
}

/// Absent, zero, or negative counts mean "use the page size". Treating 0 as
/// unset rather than "select nothing" preserves the service's established
/// behavior.
fn normalize_requested(requested: Option<i64>, page_size: usize) -> usize {
    match requested {
        Some(n) if n >= 1 => n as usize,
        _ => page_size,
    }
}
