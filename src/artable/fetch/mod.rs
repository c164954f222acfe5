//! # Fetch Layer
//!
//! This module defines the page-fetching abstraction. The [`PageFetcher`]
//! trait lets the application work against different page sources.
//!
//! ## Design Rationale
//!
//! Fetching is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryFetcher` (no network needed)
//! - Keep the selection logic **decoupled** from HTTP details
//!
//! ## Implementations
//!
//! - [`http::HttpFetcher`]: production fetcher for the remote paging API
//!   (`GET <endpoint>?page=<n>`, JSON body decoded into a [`Page`])
//! - [`memory::InMemoryFetcher`]: canned pages for tests, with fetch
//!   counting and failure injection
//!
//! A fetcher is a pure passthrough: one request, one page, no retries, no
//! local state. Bounds checking against `total_pages` is the caller's job.

use crate::error::Result;
use crate::model::Page;
use async_trait::async_trait;

pub mod http;
pub mod memory;

/// Abstract interface for fetching one page of the remote dataset.
#[async_trait]
pub trait PageFetcher {
    /// Fetch the page at a one-based index (`page_one_based >= 1`).
    ///
    /// Returns the page's rows plus a fresh pagination snapshot. Failures
    /// (network, timeout, malformed body) propagate to the caller; there is
    /// no retry at this layer.
    async fn fetch_page(&self, page_one_based: usize) -> Result<Page>;
}
