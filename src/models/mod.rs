//! Data models for SiYuan searches and launcher output.
//!
//! - [`Workspace`] - A SiYuan data directory discovered from the environment
//! - [`Block`] - One search hit returned by the kernel's HTTP API
//! - [`SearchRequest`] / [`SearchResponse`] - Typed wire format for full-text search
//! - [`LauncherItem`] / [`ItemList`] - Result rows written to stdout
//!
//! Wire types are validated by serde at the deserialization boundary; a missing
//! required field is a parse error, not a silently defaulted value.

pub mod block;
pub mod item;
pub mod request;
pub mod workspace;

pub use block::{Block, BlockType, TaggedBlock};
pub use item::{ItemIcon, ItemList, LauncherItem};
pub use request::{BlockTypeFilter, SearchData, SearchRequest, SearchResponse};
pub use workspace::Workspace;
