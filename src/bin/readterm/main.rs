//! Readterm entrypoint so the article view and the style panel start as one TUI.
//!
//! Reads an article into the alternate screen and overlays a style panel
//! toggled by an arrow button. Edits stay in the panel's draft until the
//! reader applies them; outside clicks and Escape close the panel untouched.

mod article;
mod article_view;
mod arrow_button;
mod config;
mod cycle_index;
mod event_loop;
mod input;
mod outside_click;
mod params_panel;
mod style_options;

use std::io;

use anyhow::Result;
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use readterm::{init_logging, TerminalRestoreGuard};

use crate::article::Article;
use crate::config::ReaderConfig;
use crate::event_loop::{run_event_loop, EventLoopState};
use crate::style_options::DEFAULT_ARTICLE_STYLE;

fn main() -> Result<()> {
    let config = ReaderConfig::parse();

    if config.print_default_style {
        println!("{}", serde_json::to_string_pretty(&DEFAULT_ARTICLE_STYLE)?);
        return Ok(());
    }

    init_logging(config.logs, config.log_file.as_deref())?;
    let article = Article::load(config.article.as_deref())?;

    let guard = TerminalRestoreGuard::new();
    let mut stdout = io::stdout();
    guard.acquire(&mut stdout, !config.no_mouse)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut state = EventLoopState::new(article, !config.no_mouse);
    let result = run_event_loop(&mut terminal, &mut state);

    guard.restore();
    result
}
