//! Panel form state so draft edits and navigation stay apart from rendering.

use crate::cycle_index::cycle_index;
use crate::style_options::{ArticleStyle, DEFAULT_ARTICLE_STYLE};

use super::items::{PanelItem, PANEL_ITEMS};

/// Open flag, working draft, and the keyboard cursor over `PANEL_ITEMS`.
#[derive(Debug)]
pub(crate) struct PanelState {
    pub(crate) is_open: bool,
    pub(crate) draft: ArticleStyle,
    pub(crate) selected: usize,
}

impl PanelState {
    pub(crate) fn new() -> Self {
        Self {
            is_open: false,
            draft: DEFAULT_ARTICLE_STYLE,
            selected: 0,
        }
    }

    pub(crate) fn selected_item(&self) -> PanelItem {
        PANEL_ITEMS[self.selected.min(PANEL_ITEMS.len() - 1)]
    }

    /// Move the cursor one selectable row in `direction`, wrapping and
    /// skipping rule rows.
    pub(crate) fn select_step(&mut self, direction: i32) {
        let mut idx = self.selected;
        for _ in 0..PANEL_ITEMS.len() {
            idx = cycle_index(idx, PANEL_ITEMS.len(), direction);
            if PANEL_ITEMS[idx].is_selectable() {
                self.selected = idx;
                return;
            }
        }
    }

    /// Put the cursor on a row hit by the mouse; rule rows are not targets.
    pub(crate) fn select_row(&mut self, idx: usize) -> bool {
        match PANEL_ITEMS.get(idx) {
            Some(item) if item.is_selectable() => {
                self.selected = idx;
                true
            }
            _ => false,
        }
    }
}
