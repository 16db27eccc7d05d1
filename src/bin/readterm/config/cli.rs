use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "readterm",
    about = "Terminal article reader with a live style panel",
    version
)]
pub(crate) struct ReaderConfig {
    /// Article text file to read (bundled sample when omitted)
    #[arg(value_name = "ARTICLE")]
    pub(crate) article: Option<PathBuf>,

    /// Write debug diagnostics to the log file
    #[arg(long, default_value_t = false)]
    pub(crate) logs: bool,

    /// Log file path (defaults to readterm.log in the temp dir)
    #[arg(long = "log-file", env = "READTERM_LOG_FILE")]
    pub(crate) log_file: Option<PathBuf>,

    /// Keyboard-only mode: skip mouse capture and outside-click closing
    #[arg(long = "no-mouse", default_value_t = false)]
    pub(crate) no_mouse: bool,

    /// Print the default article style as JSON and exit
    #[arg(long = "print-default-style", default_value_t = false)]
    pub(crate) print_default_style: bool,
}
