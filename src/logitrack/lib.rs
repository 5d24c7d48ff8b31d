//! # LogiTrack Architecture
//!
//! LogiTrack is a **UI-agnostic logistics dashboard library**: shipments,
//! orders, fleet and analytics views over pluggable data sources. The terminal
//! client in `cli/` is one consumer of it, not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, installs tracing    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin async facade over commands                          │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Mounts views, applies search/filter/sort/page            │
//! │  - Builds tiles, listings and detail panes                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs, record_store.rs, query.rs, ...)       │
//! │  - Per-view state, pure filtering, sorting, aggregation     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Source Layer (store/)                                 │
//! │  - Async DataSource trait                                   │
//! │  - FixtureSource, FileSource, InMemorySource                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns Rust types, logs
//! through `tracing`, and never prints or exits. Each view owns its own state;
//! nothing is global.
//!
//! ## Testing Strategy
//!
//! 1. **Views and queries**: unit tests over the fixtures, most of the suite.
//! 2. **Commands**: async tests against `InMemorySource` and `FixtureSource`
//!    with a paused tokio clock where delays matter.
//! 3. **API**: dispatch tests.
//! 4. **CLI**: `assert_cmd` integration tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per screen
//! - [`view`]: Collection views and their state
//! - [`record_store`]: Pending/loaded record collections
//! - [`query`], [`sort`], [`paginate`]: The table pipeline
//! - [`aggregate`]: Counts, sums and summary tiles
//! - [`metrics`]: Dashboard, fleet and analytics display values
//! - [`model`]: Records and their statuses
//! - [`route`]: Navigation targets and titles
//! - [`store`]: Data source abstraction and implementations
//! - [`fixtures`]: Built-in datasets
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and logging setup for the binary (not part of the lib API)

pub mod aggregate;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod model;
pub mod paginate;
pub mod query;
pub mod record_store;
pub mod route;
pub mod sort;
pub mod store;
pub mod view;
