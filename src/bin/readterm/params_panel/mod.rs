//! Article params panel wiring so schema, state, and rendering evolve together.

mod items;
mod render;
mod state;

pub(crate) use items::{
    item_at_row, panel_rect, radio_option_for_click, select_direction_for_click, PanelItem,
    PanelView, PANEL_ITEMS, PANEL_OPTION_START_ROW,
};
pub(crate) use state::PanelState;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::arrow_button::{arrow_area, ArrowButton, ArrowButtonConfig};
use crate::cycle_index::cycle_option;
use crate::outside_click::WatchRegion;
use crate::style_options::{
    ArticleStyle, OptionValue, StyleProperty, DEFAULT_ARTICLE_STYLE, FONT_SIZE_OPTIONS,
};

/// Receives a full style snapshot on every apply (and reset).
pub(crate) type UpdateHandler = Box<dyn FnMut(ArticleStyle)>;

/// Why an open panel closed without a handle toggle; recorded in the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseCause {
    Escape,
    Outside,
}

/// The style-configuration panel: arrow toggle, draft form, commit callback.
pub(crate) struct ParamsPanel {
    state: PanelState,
    arrow: ArrowButton,
    update: UpdateHandler,
}

impl ParamsPanel {
    pub(crate) fn new(update: UpdateHandler) -> Self {
        Self {
            state: PanelState::new(),
            arrow: ArrowButton::new(ArrowButtonConfig::default()),
            update,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub(crate) fn draft(&self) -> &ArticleStyle {
        &self.state.draft
    }

    pub(crate) fn selected_item(&self) -> PanelItem {
        self.state.selected_item()
    }

    /// Arrow activation: fire the handle's hook, then flip open/closed.
    /// Returns the new open state. Opening rewinds the cursor to the top.
    pub(crate) fn handle_toggle(&mut self) -> bool {
        tracing::debug!(control = self.arrow.accessible_label(), "handle activated");
        self.arrow.activate();
        self.state.is_open = !self.state.is_open;
        if self.state.is_open {
            self.state.selected = 0;
        }
        self.arrow.set_open(self.state.is_open);
        tracing::debug!(open = self.state.is_open, "panel toggled by handle");
        self.state.is_open
    }

    /// Close without touching the draft and without notifying the host.
    pub(crate) fn close(&mut self, cause: CloseCause) {
        if !self.state.is_open {
            return;
        }
        self.state.is_open = false;
        self.arrow.set_open(false);
        tracing::debug!(?cause, "panel closed");
    }

    /// Replace exactly one draft field with a member of its option set.
    pub(crate) fn edit(&mut self, property: StyleProperty, value: &'static OptionValue) {
        property.replace(&mut self.state.draft, value);
    }

    /// Publish the current draft. The panel stays open and the draft stays
    /// as it is; the host sees one snapshot per call.
    pub(crate) fn apply(&mut self) {
        tracing::debug!("draft applied");
        (self.update)(self.state.draft);
    }

    /// Reset is apply-with-defaults: the draft goes back to the default
    /// style and the host is notified in the same action.
    pub(crate) fn reset(&mut self) {
        self.state.draft = DEFAULT_ARTICLE_STYLE;
        tracing::debug!("draft reset to defaults");
        (self.update)(DEFAULT_ARTICLE_STYLE);
    }

    pub(crate) fn select_step(&mut self, direction: i32) {
        self.state.select_step(direction);
    }

    /// Cycle the focused row's option set; no-op on action rows.
    pub(crate) fn cycle_selected(&mut self, direction: i32) {
        if let Some(property) = self.state.selected_item().property() {
            let next = cycle_option(
                property.options(),
                property.current(&self.state.draft),
                direction,
            );
            self.edit(property, next);
        }
    }

    /// Enter on the focused row: step a property, or run an action button.
    pub(crate) fn activate_selected(&mut self) {
        match self.selected_item() {
            PanelItem::Reset => self.reset(),
            PanelItem::Apply => self.apply(),
            item if item.property().is_some() => self.cycle_selected(1),
            _ => {}
        }
    }

    /// A pointer-down already classified as inside the panel.
    pub(crate) fn handle_panel_click(&mut self, x: u16, y: u16, panel: Rect) {
        let Some((idx, item)) = item_at_row(panel, y) else {
            return;
        };
        if !self.state.select_row(idx) {
            return;
        }
        let rel_x = x.saturating_sub(panel.x);
        match item {
            PanelItem::Reset => self.reset(),
            PanelItem::Apply => self.apply(),
            PanelItem::FontSize => {
                if let Some(option_idx) = radio_option_for_click(rel_x, FONT_SIZE_OPTIONS.len()) {
                    self.edit(StyleProperty::FontSize, &FONT_SIZE_OPTIONS[option_idx]);
                }
            }
            _ => self.cycle_selected(select_direction_for_click(rel_x)),
        }
    }

    /// Region the outside-click watcher guards while the panel is open.
    pub(crate) fn watch_region(&self, viewport: Rect) -> WatchRegion {
        let panel = panel_rect(viewport);
        WatchRegion {
            panel,
            arrow: arrow_area(viewport, Some(panel)),
        }
    }

    pub(crate) fn render(&self, viewport: Rect, buf: &mut Buffer) {
        debug_assert_eq!(self.arrow.is_open(), self.state.is_open);
        let open_panel = self.is_open().then(|| panel_rect(viewport));
        if let Some(panel) = open_panel {
            let view = PanelView {
                selected: self.state.selected,
                draft: self.draft(),
            };
            render::render_panel(&view, panel, buf);
        }
        self.arrow.render(arrow_area(viewport, open_panel), buf);
    }
}
