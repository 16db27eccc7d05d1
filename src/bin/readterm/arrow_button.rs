//! Arrow toggle button so the panel opens and closes from one affordance.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const ARROW_WIDTH: u16 = 3;

pub(crate) type ActivateHandler = Box<dyn FnMut()>;

/// Arrow button configuration; both fields are independently optional.
#[derive(Default)]
pub(crate) struct ArrowButtonConfig {
    /// Rendering hint only; absent means closed.
    pub(crate) in_open: bool,
    /// Invoked exactly once per activation; absent makes activation a no-op.
    pub(crate) on_activate: Option<ActivateHandler>,
}

pub(crate) struct ArrowButton {
    config: ArrowButtonConfig,
}

impl ArrowButton {
    pub(crate) fn new(config: ArrowButtonConfig) -> Self {
        Self { config }
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.config.in_open = open;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.config.in_open
    }

    /// Fire the activation handler exactly once, or do nothing without one.
    pub(crate) fn activate(&mut self) {
        if let Some(handler) = self.config.on_activate.as_mut() {
            handler();
        }
    }

    /// The TUI analogue of the button's accessible name.
    pub(crate) fn accessible_label(&self) -> &'static str {
        if self.config.in_open {
            "Close the article style panel"
        } else {
            "Open the article style panel"
        }
    }

    fn glyph(&self) -> &'static str {
        if self.config.in_open {
            "\u{25c2}" // ◂ points back toward the closed position
        } else {
            "\u{25b8}" // ▸
        }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::new()
            .fg(Color::Yellow)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD);
        buf.set_string(area.x, area.y, format!(" {} ", self.glyph()), style);
    }
}

/// Arrow hitbox: glued to the open panel's right edge, or parked at the
/// viewport's left edge while closed. One row tall, vertically centered.
#[must_use]
pub(crate) fn arrow_area(viewport: Rect, open_panel: Option<Rect>) -> Rect {
    let y = viewport.y + viewport.height / 2;
    let x = match open_panel {
        Some(panel) => panel.x.saturating_add(panel.width),
        None => viewport.x,
    };
    let width = ARROW_WIDTH.min(viewport.right().saturating_sub(x));
    let height = u16::from(viewport.height > 0);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn activation_fires_the_handler_exactly_once_per_call() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let mut button = ArrowButton::new(ArrowButtonConfig {
            in_open: false,
            on_activate: Some(Box::new(move || counter.set(counter.get() + 1))),
        });
        button.activate();
        assert_eq!(calls.get(), 1);
        button.activate();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn activation_without_a_handler_is_a_no_op() {
        let mut button = ArrowButton::new(ArrowButtonConfig::default());
        button.activate();
        assert!(!button.is_open());
    }

    #[test]
    fn accessible_label_tracks_open_state() {
        let mut button = ArrowButton::new(ArrowButtonConfig::default());
        assert!(button.accessible_label().starts_with("Open"));
        button.set_open(true);
        assert!(button.accessible_label().starts_with("Close"));
    }

    #[test]
    fn arrow_parks_at_the_left_edge_while_closed() {
        let viewport = Rect::new(0, 0, 80, 24);
        let area = arrow_area(viewport, None);
        assert_eq!(area.x, 0);
        assert_eq!(area.y, 12);
        assert_eq!(area.width, ARROW_WIDTH);
    }

    #[test]
    fn arrow_glues_to_the_open_panels_right_edge() {
        let viewport = Rect::new(0, 0, 80, 24);
        let panel = Rect::new(0, 0, 34, 24);
        let area = arrow_area(viewport, Some(panel));
        assert_eq!(area.x, 34);
        assert_eq!(area.width, ARROW_WIDTH);
    }

    #[test]
    fn arrow_width_clamps_inside_a_tiny_viewport() {
        let viewport = Rect::new(0, 0, 2, 4);
        let area = arrow_area(viewport, None);
        assert_eq!(area.width, 2);
    }
}
