//! File-backed tracing so diagnostics never write into the live TUI.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::Level;

/// Path to the log file we append to between runs.
#[must_use]
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("readterm.log")
}

/// Install the global tracing subscriber when diagnostics are requested.
///
/// With `enabled == false` this is a no-op and every `tracing` macro call
/// stays a disabled-dispatch check. Re-initialization (tests spawning the
/// binary twice in-process) is tolerated: the first subscriber wins.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for append.
pub fn init_logging(enabled: bool, path: Option<&Path>) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }
    let path = path.map_or_else(log_file_path, Path::to_path_buf);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();
    // A second init keeps the first subscriber; not an error for our callers.
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_lives_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("readterm.log"));
    }

    #[test]
    fn disabled_logging_is_a_no_op() {
        assert!(init_logging(false, None).is_ok());
    }

    #[test]
    fn enabled_logging_creates_the_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("readterm-logging-test.log");
        let _ = std::fs::remove_file(&path);
        init_logging(true, Some(&path)).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
