//! Port resolution for running SiYuan workspaces
//!
//! Each workspace runs its own kernel, which picks an HTTP port at boot and logs it to
//! `temp/siyuan.log`. A missing log means the workspace was never started on this
//! machine and is reported as "no port" rather than as an error.

pub mod port;

pub use port::{extract_port, parse_port_from_log, resolve_port};
