//! # Artable Architecture
//!
//! Artable is a **UI-agnostic client for a remotely paginated dataset**. This is not a CLI
//! application that happens to have some library code—it's a library that happens to have a
//! CLI client.
//!
//! The dataset is served page by page by a remote API; the one operation with real design
//! content is the **cross-page selection accumulator**: given a desired row count N and the
//! page the user is currently looking at, fetch just enough of the following pages, in
//! order and without duplication or gaps, to hand back the first N rows, or fewer when the
//! dataset runs out.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs/print.rs, wired by main.rs)             │
//! │  - Parses arguments, renders the table, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, session.rs)                             │
//! │  - Thin facade over commands; session tracks page state     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Page loading and the selection accumulator               │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the fetcher it is handed       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fetch Layer (fetch/)                                       │
//! │  - Abstract PageFetcher trait                               │
//! │  - HttpFetcher (production), InMemoryFetcher (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, fetch), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web frontend, or any other UI.
//!
//! ## Concurrency Model
//!
//! Fetches are `async` and awaited one at a time. The accumulator fetches pages
//! sequentially by design (strict page-order accumulation, one request in flight against
//! the remote service), and [`session::TableSession`] takes `&mut self` for every
//! operation, so a session never has two runs racing each other.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`session`]: Stateful table session (current page + stored selection)
//! - [`commands`]: Page loading and the selection accumulator
//! - [`fetch`]: Page-fetching abstraction and implementations
//! - [`model`]: Core data types (`Artwork`, `Page`, `PageView`, `Selection`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod session;
