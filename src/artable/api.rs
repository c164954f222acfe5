//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all artable operations, regardless of the UI being used.
//!
//! The facade dispatches to commands and returns structured
//! `Result<CmdResult>` values. It holds no page state—page index, page
//! rows, and pagination metadata are plain values passed in and returned
//! (stateful tracking lives in [`crate::session`]). It performs no I/O of
//! its own and no presentation work.
//!
//! ## Generic Over PageFetcher
//!
//! `ArtableApi<F: PageFetcher>` is generic over the page source:
//! - Production: `ArtableApi<HttpFetcher>`
//! - Testing: `ArtableApi<InMemoryFetcher>`
//!
//! This enables testing every layer above the fetcher without a network.

use crate::commands;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::model::PageView;

/// The main API facade for artable operations.
///
/// Generic over `PageFetcher` to allow different page sources. All UI
/// clients (CLI, TUI, etc.) should interact through this API.
pub struct ArtableApi<F: PageFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> ArtableApi<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch one page for navigation. `total_pages`, when known from a
    /// previous load, bounds the request.
    pub async fn load_page(
        &self,
        page_zero_based: usize,
        total_pages: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::load::run(&self.fetcher, page_zero_based, total_pages).await
    }

    /// Run the selection accumulator anchored at `view`.
    pub async fn select_rows(
        &self,
        view: &PageView,
        requested: Option<i64>,
    ) -> Result<commands::CmdResult> {
        commands::select::run(&self.fetcher, view, requested).await
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
