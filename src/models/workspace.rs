use std::path::PathBuf;

use crate::utils::workspace_label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Environment variable the directory was read from
    pub env_var: String,
    pub dir: PathBuf,
    /// Short name shown in item subtitles
    pub label: String,
}

impl Workspace {
    pub fn new(env_var: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let label = workspace_label(&dir);
        Self { env_var: env_var.into(), dir, label }
    }
}
