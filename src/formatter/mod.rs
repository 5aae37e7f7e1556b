//! Launcher output formatting
//!
//! Turns aggregated search hits into the `{"items": [...]}` document a launcher
//! script filter reads from stdout.

pub mod items;

pub use items::{block_uri, clean_title, format_items, icon_for, write_items};
