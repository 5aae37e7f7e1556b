use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

use crate::models::{Block, SearchRequest, SearchResponse};

/// Host every local kernel listens on
const LOOPBACK_HOST: &str = "127.0.0.1";
const FULL_TEXT_SEARCH_PATH: &str = "/api/search/fullTextSearchBlock";

/// Blocking client for the kernel's full-text search endpoint
pub struct SearchClient {
    http: Client,
}

impl SearchClient {
    /// Build a client for loopback kernels
    ///
    /// System proxies are bypassed; traffic never leaves the machine.
    pub fn new() -> Result<Self> {
        let http = Client::builder().no_proxy().build().context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Run a keyword search against the kernel listening on `port`
    ///
    /// # Returns
    ///
    /// The matched blocks, or an empty Vec when the kernel cannot be reached
    /// (connection refused, reset, ...). Transport failures are logged and never
    /// returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The response body cannot be read
    /// - The body is not a valid search response (malformed JSON, missing fields)
    /// - The kernel reports a non-zero result code
    pub fn search_blocks(&self, query: &str, port: u16) -> Result<Vec<Block>> {
        let url = search_url(port);
        let request = SearchRequest::full_text(query);
        let body = serde_json::to_string(&request).context("Failed to encode search request")?;
        eprintln!("POST {} {}", url, body);

        let response = match self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Warning: Search request to {} failed: {}", url, e);
                return Ok(Vec::new());
            }
        };

        // Status is not checked: error pages fail JSON decoding below
        let text =
            response.text().with_context(|| format!("Failed to read response from {}", url))?;
        eprintln!("{} -> {}", port, text);

        parse_search_response(&text)
    }
}

/// Full URL of the search endpoint for a kernel port
pub fn search_url(port: u16) -> String {
    format!("http://{}:{}{}", LOOPBACK_HOST, port, FULL_TEXT_SEARCH_PATH)
}

/// Decode a search response body into its block list
///
/// A `null` or absent block list means nothing matched.
pub fn parse_search_response(text: &str) -> Result<Vec<Block>> {
    let response: SearchResponse =
        serde_json::from_str(text).context("Failed to parse search response")?;

    if response.code != 0 {
        bail!("Search failed with code {}: {}", response.code, response.msg);
    }

    let data = response.data.context("Search response has no data")?;
    Ok(data.blocks.unwrap_or_default())
}
