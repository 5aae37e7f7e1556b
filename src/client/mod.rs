//! HTTP client for the SiYuan kernel's search API
//!
//! # Error Handling Strategy
//!
//! - **Transport failures**: A kernel that is down or refusing connections contributes
//!   no results. The failure is logged to stderr and an empty list is returned.
//! - **Response failures**: Bodies that are not a well-formed search response are
//!   errors. The caller decides whether they are fatal (they never are for a single
//!   workspace).

pub mod search;

pub use search::{SearchClient, parse_search_response, search_url};
