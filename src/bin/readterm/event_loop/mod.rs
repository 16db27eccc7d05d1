//! Single-threaded event loop so every transition runs in one dispatch path.

mod input_dispatch;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::article::Article;
use crate::article_view;
use crate::input;
use crate::outside_click::OutsideClickWatcher;
use crate::params_panel::ParamsPanel;
use crate::style_options::{ArticleStyle, DEFAULT_ARTICLE_STYLE};

pub(crate) struct EventLoopState {
    pub(crate) article: Article,
    /// The committed style the article view reads; the panel's `update`
    /// callback is its only writer.
    pub(crate) applied: Rc<RefCell<ArticleStyle>>,
    pub(crate) panel: ParamsPanel,
    pub(crate) watcher: OutsideClickWatcher,
    pub(crate) mouse_enabled: bool,
    /// Geometry of the last drawn frame; dispatch works against it.
    pub(crate) viewport: Rect,
}

impl EventLoopState {
    pub(crate) fn new(article: Article, mouse_enabled: bool) -> Self {
        let applied = Rc::new(RefCell::new(DEFAULT_ARTICLE_STYLE));
        let sink = Rc::clone(&applied);
        let panel = ParamsPanel::new(Box::new(move |style| {
            tracing::debug!(
                font = style.font_family.value,
                size = style.font_size.value,
                color = style.font_color.value,
                background = style.background_color.value,
                width = style.content_width.value,
                "style committed"
            );
            *sink.borrow_mut() = style;
        }));
        Self {
            article,
            applied,
            panel,
            watcher: OutsideClickWatcher::default(),
            mouse_enabled,
            viewport: Rect::default(),
        }
    }
}

/// Draw, block on the next terminal event, dispatch, repeat.
pub(crate) fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut EventLoopState,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut running = true;
    while running {
        terminal.draw(|frame| {
            state.viewport = frame.area();
            render_frame(state, frame.buffer_mut());
        })?;
        let event = event::read()?;
        if let Some(input) = input::translate(&event) {
            input_dispatch::dispatch(state, input, &mut running);
        }
    }
    // Teardown releases the watcher even when the panel was left open.
    state.watcher.stop();
    Ok(())
}

pub(super) fn render_frame(state: &EventLoopState, buf: &mut Buffer) {
    article_view::render_article(
        &state.article,
        &state.applied.borrow(),
        state.viewport,
        buf,
    );
    state.panel.render(state.viewport, buf);
}
