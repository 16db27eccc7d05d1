//! Outside-interaction watcher so the open panel closes on pointer-downs beyond it.

use ratatui::layout::{Position, Rect};

/// The region a pointer-down is tested against while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WatchRegion {
    pub(crate) panel: Rect,
    pub(crate) arrow: Rect,
}

/// Verdict for one pointer-down while the watcher decides routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerVerdict {
    /// Disarmed; the event is none of the panel's business.
    NotWatching,
    InsidePanel,
    /// The toggle affordance. Routed as a toggle, never as outside, so a
    /// click on the arrow while open is a single well-defined transition.
    OnArrow,
    Outside,
}

/// Armed while the panel is open; disarmed on every close path and at
/// teardown. Re-arming replaces the previous region, so repeated open/close
/// cycles cannot accumulate stale registrations.
#[derive(Debug, Default)]
pub(crate) struct OutsideClickWatcher {
    region: Option<WatchRegion>,
}

impl OutsideClickWatcher {
    pub(crate) fn start(&mut self, region: WatchRegion) {
        self.region = Some(region);
    }

    pub(crate) fn stop(&mut self) {
        self.region = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.region.is_some()
    }

    pub(crate) fn classify(&self, x: u16, y: u16) -> PointerVerdict {
        let Some(region) = self.region else {
            return PointerVerdict::NotWatching;
        };
        let position = Position::new(x, y);
        if region.arrow.contains(position) {
            PointerVerdict::OnArrow
        } else if region.panel.contains(position) {
            PointerVerdict::InsidePanel
        } else {
            PointerVerdict::Outside
        }
    }
}
