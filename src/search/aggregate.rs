use crate::client::SearchClient;
use crate::models::{TaggedBlock, Workspace};
use crate::workspace::resolve_port;

/// What searching one workspace produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceOutcome {
    /// The kernel answered; may hold zero blocks
    Matched(Vec<TaggedBlock>),
    /// No log file or no boot line, so no kernel to ask
    NoPort,
    /// Port resolution or the search itself failed
    Failed { reason: String },
}

impl WorkspaceOutcome {
    pub fn into_blocks(self) -> Vec<TaggedBlock> {
        match self {
            WorkspaceOutcome::Matched(blocks) => blocks,
            WorkspaceOutcome::NoPort | WorkspaceOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Resolve a workspace's port and search it, tagging hits with the workspace label
pub fn search_workspace(
    client: &SearchClient,
    query: &str,
    workspace: &Workspace,
) -> WorkspaceOutcome {
    let port = match resolve_port(&workspace.dir) {
        Ok(Some(port)) => port,
        Ok(None) => return WorkspaceOutcome::NoPort,
        Err(e) => return WorkspaceOutcome::Failed { reason: format!("{:#}", e) },
    };

    match client.search_blocks(query, port) {
        Ok(blocks) => WorkspaceOutcome::Matched(
            blocks
                .into_iter()
                .map(|block| TaggedBlock { workspace: workspace.label.clone(), block })
                .collect(),
        ),
        Err(e) => WorkspaceOutcome::Failed { reason: format!("{:#}", e) },
    }
}

/// Search every workspace in order
///
/// A failure in one workspace is logged and never stops the others. Outcomes are
/// returned in the same order as `workspaces`.
pub fn search_workspaces(
    client: &SearchClient,
    query: &str,
    workspaces: &[Workspace],
) -> Vec<WorkspaceOutcome> {
    let mut outcomes = Vec::with_capacity(workspaces.len());
    let mut matched = 0;
    let mut failed = 0;

    for workspace in workspaces {
        let outcome = search_workspace(client, query, workspace);
        match &outcome {
            WorkspaceOutcome::Matched(blocks) => matched += blocks.len(),
            WorkspaceOutcome::NoPort => {}
            WorkspaceOutcome::Failed { reason } => {
                failed += 1;
                eprintln!(
                    "Warning: Skipping workspace {} ({}): {}",
                    workspace.label,
                    workspace.dir.display(),
                    reason
                );
            }
        }
        outcomes.push(outcome);
    }

    eprintln!(
        "Searched {} workspaces: {} blocks matched ({} failed)",
        workspaces.len(),
        matched,
        failed
    );

    outcomes
}

/// Flatten outcomes into one block list, keeping workspace order
pub fn collect_blocks(outcomes: Vec<WorkspaceOutcome>) -> Vec<TaggedBlock> {
    outcomes.into_iter().flat_map(WorkspaceOutcome::into_blocks).collect()
}
