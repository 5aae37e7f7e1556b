use serde::{Deserialize, Serialize};

use super::Block;

/// Keyword search, as opposed to query syntax, SQL or regex
pub const METHOD_KEYWORD: u8 = 0;
/// No grouping by document
pub const GROUP_BY_NONE: u8 = 0;
/// Default relevance ordering
pub const ORDER_BY_DEFAULT: u8 = 0;

/// Block-type switches sent with every search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTypeFilter {
    pub blockquote: bool,
    pub code_block: bool,
    pub document: bool,
    pub embed_block: bool,
    pub heading: bool,
    pub html_block: bool,
    pub list: bool,
    pub list_item: bool,
    pub math_block: bool,
    pub paragraph: bool,
    pub super_block: bool,
    pub table: bool,
}

impl BlockTypeFilter {
    pub fn all() -> Self {
        Self {
            blockquote: true,
            code_block: true,
            document: true,
            embed_block: true,
            heading: true,
            html_block: true,
            list: true,
            list_item: true,
            math_block: true,
            paragraph: true,
            super_block: true,
            table: true,
        }
    }
}

/// Body of `POST /api/search/fullTextSearchBlock`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub method: u8,
    #[serde(rename = "type")]
    pub types: BlockTypeFilter,
    #[serde(rename = "path")]
    pub paths: Vec<String>,
    pub group_by: u8,
    pub order_by: u8,
}

impl SearchRequest {
    /// Keyword search across every block type and every notebook
    pub fn full_text(query: &str) -> Self {
        Self {
            query: query.to_string(),
            method: METHOD_KEYWORD,
            types: BlockTypeFilter::all(),
            paths: Vec::new(),
            group_by: GROUP_BY_NONE,
            order_by: ORDER_BY_DEFAULT,
        }
    }
}

/// Standard SiYuan API envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    // The kernel sends `null` rather than `[]` when nothing matched
    #[serde(default)]
    pub blocks: Option<Vec<Block>>,
}
