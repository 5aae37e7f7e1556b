use std::path::Path;

/// Log file written by the SiYuan kernel, relative to the workspace directory
pub const LOG_FILE_RELATIVE_PATH: &str = "temp/siyuan.log";

/// Path of the kernel log inside a workspace
pub fn log_file_path(workspace_dir: &Path) -> std::path::PathBuf {
    workspace_dir.join(LOG_FILE_RELATIVE_PATH)
}

/// Short display name for a workspace directory
///
/// Uses the final path component, ignoring trailing separators. Falls back to the
/// whole path when there is no final component (e.g. `/`).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use siyuan_search::utils::workspace_label;
///
/// assert_eq!(workspace_label(Path::new("/Users/alice/SiYuan")), "SiYuan");
/// assert_eq!(workspace_label(Path::new("/Users/alice/SiYuan/")), "SiYuan");
/// ```
pub fn workspace_label(workspace_dir: &Path) -> String {
    match workspace_dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => workspace_dir.to_string_lossy().into_owned(),
    }
}
