use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::utils::log_file_path;

/// Substring present on every kernel boot line
const BOOT_MARKER: &str = "http server";

/// e.g. `kernel [pid=31181] http server [127.0.0.1:56004] is booting`
static BOOT_PORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http server \[.*?:(\d+)\]").expect("boot line pattern is valid")
});

/// Resolve the HTTP port of the kernel serving a workspace
///
/// Reads `<workspace>/temp/siyuan.log` and returns the port announced by the most
/// recent boot line.
///
/// # Returns
///
/// - `Ok(Some(port))` when a boot line was found
/// - `Ok(None)` when the log file does not exist or contains no boot line
///
/// # Errors
///
/// Returns an error if the log file exists but cannot be read.
pub fn resolve_port(workspace_dir: &Path) -> Result<Option<u16>> {
    let log_path = log_file_path(workspace_dir);

    let bytes = match fs::read(&log_path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("{}: not found", log_path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read log file: {}", log_path.display()));
        }
    };

    // Kernel logs may contain partial writes; decode lossily rather than fail
    let port = parse_port_from_log(&String::from_utf8_lossy(&bytes));
    match port {
        Some(port) => eprintln!("{}: port {}", log_path.display(), port),
        None => eprintln!("{}: no http server boot line", log_path.display()),
    }
    Ok(port)
}

/// Scan log text and return the port from the last boot line
///
/// Later boots supersede earlier ones, so the last match across all lines wins.
pub fn parse_port_from_log(log: &str) -> Option<u16> {
    log.lines().filter_map(extract_port).last()
}

/// Extract the port announced on a single log line
///
/// When a line carries several `http server [...]` groups the last one is used.
/// Captures that do not fit in a `u16` are ignored.
pub fn extract_port(line: &str) -> Option<u16> {
    if !line.contains(BOOT_MARKER) {
        return None;
    }
    BOOT_PORT_PATTERN
        .captures_iter(line)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u16>().ok())
        .last()
}
