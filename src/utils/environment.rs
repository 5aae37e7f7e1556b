use std::env;

use crate::models::Workspace;

/// Every environment variable starting with this prefix names a workspace directory
pub const WORKSPACE_ENV_PREFIX: &str = "SIYUAN_WORKSPACE_";

/// Collect workspaces from the current process environment
///
/// Reads the environment once; the returned list is the run's entire configuration.
pub fn workspace_dirs_from_env() -> Vec<Workspace> {
    workspace_dirs_from_vars(env::vars_os().map(|(k, v)| {
        (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned())
    }))
}

/// Collect workspaces from `(name, value)` pairs
///
/// Pairs are kept when the name starts with [`WORKSPACE_ENV_PREFIX`]. The result is
/// sorted by variable name so output order does not depend on the environment's order.
/// Variables with an empty value are skipped with a warning.
pub fn workspace_dirs_from_vars<I>(vars: I) -> Vec<Workspace>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut workspaces: Vec<Workspace> = vars
        .into_iter()
        .filter(|(name, _)| name.starts_with(WORKSPACE_ENV_PREFIX))
        .filter_map(|(name, value)| {
            if value.trim().is_empty() {
                eprintln!("Warning: Ignoring {} (empty workspace path)", name);
                return None;
            }
            Some(Workspace::new(name, value))
        })
        .collect();

    workspaces.sort_by(|a, b| a.env_var.cmp(&b.env_var));
    workspaces
}
