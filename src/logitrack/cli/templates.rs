//! # CLI Templates
//!
//! Terminal output goes through minijinja templates kept as stand-alone `.tmp`
//! files, included here as string constants.
//!
//! A few rules the templates follow:
//!
//!     1. Whitespace: the environment runs with `trim_blocks` and
//!     `lstrip_blocks`, so a line holding only a block tag produces nothing.
//!     A line that must end in a newline ends in an expression, which is
//!     why some lines close with `{{ "" }}`. Leading indentation before a
//!     block tag is stripped, so indentation is written as `{{ "  " }}`.
//!
//!     2. Composition: `page` is the only template the renderer calls for a
//!     screen. It includes `tiles` and, per section, `table` with the
//!     section's table bound as `table`.
//!
//!     3. Styles come from data: rows carry the style name for each cell, so
//!     templates never branch on a status to pick a color.
//!
//!     4. Layout (widths, padding, truncation) is computed in `render.rs`.
//!     Templates only place strings that are already measured.

pub const HEADER_TEMPLATE: &str = include_str!("templates/header.tmp");
pub const TILES_TEMPLATE: &str = include_str!("templates/tiles.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Every template, under the name other templates include it by.
pub const ALL: [(&str, &str); 5] = [
    ("header", HEADER_TEMPLATE),
    ("tiles", TILES_TEMPLATE),
    ("table", TABLE_TEMPLATE),
    ("page", PAGE_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];
