pub mod environment;
pub mod paths;

pub use environment::{WORKSPACE_ENV_PREFIX, workspace_dirs_from_env, workspace_dirs_from_vars};
pub use paths::{LOG_FILE_RELATIVE_PATH, log_file_path, workspace_label};
