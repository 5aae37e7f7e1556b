//! SiYuan Search - Full-text search of local SiYuan workspaces for desktop launchers
//!
//! This library connects a launcher's query box to the HTTP API that every running
//! SiYuan workspace exposes on the loopback interface. It supports:
//!
//! - Discovering workspace directories from `SIYUAN_WORKSPACE_*` environment variables
//! - Resolving each workspace's HTTP port from its `temp/siyuan.log`
//! - Running a full-text block search against each workspace
//! - Formatting matched blocks as launcher items (`{"items": [...]}`)
//!
//! # Example
//!
//! ```no_run
//! use siyuan_search::{SearchClient, format_items, search_workspaces};
//! use siyuan_search::utils::workspace_dirs_from_env;
//!
//! let workspaces = workspace_dirs_from_env();
//! let client = SearchClient::new()?;
//! let outcomes = search_workspaces(&client, "rust", &workspaces);
//! let items = format_items(&siyuan_search::search::collect_blocks(outcomes));
//! println!("{} items", items.items.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod formatter;
pub mod models;
pub mod search;
pub mod utils;
pub mod workspace;

// Re-export commonly used types
pub use client::SearchClient;
pub use formatter::{format_items, write_items};
pub use models::{Block, LauncherItem, Workspace};
pub use search::{WorkspaceOutcome, search_workspaces};
pub use workspace::resolve_port;
