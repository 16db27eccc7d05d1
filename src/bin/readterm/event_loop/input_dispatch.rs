//! Input routing so keyboard and pointer paths share the same transitions.

use ratatui::layout::{Position, Rect};

use crate::arrow_button::arrow_area;
use crate::input::InputEvent;
use crate::outside_click::PointerVerdict;
use crate::params_panel::{panel_rect, CloseCause};

use super::EventLoopState;

pub(super) fn dispatch(state: &mut EventLoopState, input: InputEvent, running: &mut bool) {
    match input {
        InputEvent::Quit => *running = false,
        InputEvent::ToggleHandle => toggle_panel(state),
        InputEvent::Escape => close_panel(state, CloseCause::Escape),
        InputEvent::CursorUp => {
            if state.panel.is_open() {
                state.panel.select_step(-1);
            }
        }
        InputEvent::CursorDown => {
            if state.panel.is_open() {
                state.panel.select_step(1);
            }
        }
        InputEvent::CycleBack => {
            if state.panel.is_open() {
                state.panel.cycle_selected(-1);
            }
        }
        InputEvent::CycleForward => {
            if state.panel.is_open() {
                state.panel.cycle_selected(1);
            }
        }
        InputEvent::Activate => {
            if state.panel.is_open() {
                state.panel.activate_selected();
            }
        }
        InputEvent::ResetShortcut => {
            if state.panel.is_open() {
                state.panel.reset();
            }
        }
        InputEvent::ApplyShortcut => {
            if state.panel.is_open() {
                state.panel.apply();
            }
        }
        InputEvent::PointerDown { x, y } => handle_pointer_down(state, x, y),
        InputEvent::Resized { cols, rows } => handle_resize(state, cols, rows),
    }
}

/// Handle activation: one net transition, with the watcher's registration
/// scoped exactly to the open interval.
fn toggle_panel(state: &mut EventLoopState) {
    if state.panel.handle_toggle() {
        if state.mouse_enabled {
            state.watcher.start(state.panel.watch_region(state.viewport));
        }
    } else {
        state.watcher.stop();
    }
}

fn close_panel(state: &mut EventLoopState, cause: CloseCause) {
    if !state.panel.is_open() {
        return;
    }
    state.panel.close(cause);
    state.watcher.stop();
}

fn handle_pointer_down(state: &mut EventLoopState, x: u16, y: u16) {
    if !state.mouse_enabled {
        return;
    }
    if state.panel.is_open() {
        match state.watcher.classify(x, y) {
            PointerVerdict::Outside => close_panel(state, CloseCause::Outside),
            // The arrow is outside the form but is the toggle affordance:
            // route it as the handle transition, not as an outside close.
            PointerVerdict::OnArrow => toggle_panel(state),
            PointerVerdict::InsidePanel => {
                let panel = panel_rect(state.viewport);
                state.panel.handle_panel_click(x, y, panel);
            }
            PointerVerdict::NotWatching => {}
        }
    } else if arrow_area(state.viewport, None).contains(Position::new(x, y)) {
        toggle_panel(state);
    }
}

fn handle_resize(state: &mut EventLoopState, cols: u16, rows: u16) {
    state.viewport = Rect::new(0, 0, cols, rows);
    if state.watcher.is_armed() {
        // Re-arm with the new geometry; start() replaces the old region.
        state.watcher.start(state.panel.watch_region(state.viewport));
    }
}
