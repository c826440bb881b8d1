//! # Pagepad Architecture
//!
//! Pagepad keeps a flat list of note pages, each with a title, an HTML body, an icon and
//! timestamps, plus the id of the page currently being edited. The library does not know
//! about terminals; the `pagepad` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the PageStore, parses selectors and commands        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - List intents (list, create, select, delete)              │
//! │  - Editing intents (view, title/content, format, icon)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page Store (store.rs)                                      │
//! │  - Ordered pages + selection, persists on every mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - StorageAdapter: page list <-> JSON under a fixed key     │
//! │  - KeyValueStore: FileStorage, InMemoryStorage              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes Rust arguments and returns `Result<CmdResult>`; it
//! never writes to stdout/stderr and never exits the process. Storage failures are not
//! retried or recovered from, they propagate to the caller.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user intent
//! - [`store`]: The page store
//! - [`storage`]: Slot storage and the page-list adapter
//! - [`model`]: `Page`, `PageId`, `PagePatch` and the seed content
//! - [`markup`]: The fixed formatting command set for page bodies
//! - [`index`]: 1-based display positions and page selectors
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod markup;
pub mod model;
pub mod storage;
pub mod store;
