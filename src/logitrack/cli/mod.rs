//! # CLI Layer
//!
//! This module is **one possible UI client** for logitrack. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap (`setup.rs`)
//! 2. **Context Setup**: config directory, `DashConfig`, and the data source
//!    (`FileSource` when a data dir is set, `FixtureSource` otherwise)
//! 3. **API Dispatch**: call the matching `DashApi` method (`commands.rs`)
//! 4. **Output Formatting**: `CmdResult` into styled text (`render.rs`,
//!    `templates.rs`, `styles.rs`)
//! 5. **Error Handling**: errors bubble up to `main.rs`, which prints them and
//!    exits non-zero
//!
//! ## Testing Strategy
//!
//! Parsing and rendering are unit-tested here. End-to-end behavior is covered
//! by `assert_cmd` tests under `tests/`. Neither tests business logic: that
//! is the command layer's job.

mod commands;
mod render;
mod setup;
mod styles;
mod telemetry;
mod templates;

pub use commands::run;
