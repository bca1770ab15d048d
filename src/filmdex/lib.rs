//! # Filmdex Architecture
//!
//! Filmdex is a **UI-agnostic catalog query library**. The terminal client
//! in `main.rs` is one front-end; the same engine could sit behind a web
//! page or a TUI without changes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs)                    │
//! │  - Parses arguments and shell lines, draws results          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Renderer trait (display.rs)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (engine.rs, filter.rs)                              │
//! │  - Owns the dataset and all session state                   │
//! │  - One method per user action, each returns a ResultSet     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Layer (commands/*.rs)                                │
//! │  - Pure search, filter-union and sort stages                │
//! │  - Operate on slices, keep no state                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dataset Sources (store/)                                   │
//! │  - CatalogSource trait: file, in-memory, bundled            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Queries Never Fail
//!
//! Everything from `engine.rs` inward works on data that is already in
//! memory. Bad input (an unknown sort key, a filter on an attribute that
//! has none) is ignored and reported as a message on the result, never as
//! an error. Only loading data and config can fail, and those errors are
//! surfaced through [`error::FilmdexError`].
//!
//! ## Identity
//!
//! Items are identified by their position in the dataset
//! ([`model::ItemId`]), never by content, so two identical records are
//! both shown when a filter matches them.
//!
//! ## Module Overview
//!
//! - [`engine`]: the stateful facade, entry point for every user action
//! - [`filter`]: per-attribute option derivation and selection tracking
//! - [`commands`]: search, filter-union and sort stages
//! - [`store`]: dataset sources
//! - [`model`]: `Movie`, `Attribute`, `ItemId`, `ViewMode`
//! - [`display`]: the `Renderer` seam
//! - [`config`]: persisted defaults
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod store;
