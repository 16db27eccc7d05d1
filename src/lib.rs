//! Shared readterm library exports so the binary and tests stay aligned.

pub mod logging;
pub mod terminal_restore;

pub use logging::{init_logging, log_file_path};
pub use terminal_restore::TerminalRestoreGuard;
