use std::io;

use anyhow::Result;
use clap::Parser;

use crate::client::SearchClient;
use crate::formatter::{format_items, write_items};
use crate::models::Workspace;
use crate::search::{collect_blocks, search_workspaces};
use crate::utils::workspace_dirs_from_env;

#[derive(Parser)]
#[command(name = "siyuan-search")]
#[command(version = "0.1.0")]
#[command(
    about = "Search running SiYuan workspaces and print launcher items as JSON",
    long_about = "Search running SiYuan workspaces and print launcher items as JSON.\n\n\
                  Workspaces are read from every SIYUAN_WORKSPACE_* environment variable."
)]
pub struct Cli {
    /// Full-text query passed from the launcher
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let workspaces = workspace_dirs_from_env();
    run_search(&cli.query, &workspaces, io::stdout().lock())
}

/// Search `workspaces` for `query` and write the launcher JSON to `out`
pub fn run_search<W: io::Write>(query: &str, workspaces: &[Workspace], out: W) -> Result<()> {
    let client = SearchClient::new()?;
    let outcomes = search_workspaces(&client, query, workspaces);
    let items = format_items(&collect_blocks(outcomes));
    write_items(&items, out)
}
