//! Multi-workspace search
//!
//! # Error Handling Strategy
//!
//! Every workspace produces a [`WorkspaceOutcome`] instead of an error:
//!
//! - **No port**: The workspace was never started (no log) or the log has no boot line.
//!   It contributes nothing and is not reported as a failure.
//! - **Transport failure**: Handled inside the client; the workspace is `Matched` with no
//!   blocks.
//! - **Failure**: Unreadable logs and malformed responses are logged to stderr with the
//!   workspace name and skipped. Other workspaces are still searched.

pub mod aggregate;

pub use aggregate::{WorkspaceOutcome, collect_blocks, search_workspace, search_workspaces};
