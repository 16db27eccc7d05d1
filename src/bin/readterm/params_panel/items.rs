//! Panel row schema so rendering and mouse dispatch derive from one table.

use ratatui::layout::Rect;

use crate::style_options::StyleProperty;

/// One row of the panel form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelItem {
    FontFamily,
    FontSize,
    FontColor,
    Rule,
    BackgroundColor,
    ContentWidth,
    Reset,
    Apply,
}

pub(crate) const PANEL_ITEMS: &[PanelItem] = &[
    PanelItem::FontFamily,
    PanelItem::FontSize,
    PanelItem::FontColor,
    PanelItem::Rule,
    PanelItem::BackgroundColor,
    PanelItem::ContentWidth,
    PanelItem::Reset,
    PanelItem::Apply,
];

/// Rows above the first item: top border, title, separator.
pub(crate) const PANEL_OPTION_START_ROW: u16 = 3;

/// Column (relative to the panel's left edge) where row text begins.
pub(crate) const ROW_TEXT_REL_X: u16 = 2;

/// Column where a row's value zone begins: marker, space, 13-column label,
/// space. The left cycle arrow and the first radio cell both sit here.
pub(crate) const VALUE_ZONE_REL_X: u16 = 18;

/// Fixed width of one rendered radio cell, `(x)` plus padded label.
pub(crate) const RADIO_CELL_WIDTH: u16 = 9;

impl PanelItem {
    pub(crate) fn is_selectable(self) -> bool {
        !matches!(self, PanelItem::Rule)
    }

    pub(crate) fn property(self) -> Option<StyleProperty> {
        match self {
            PanelItem::FontFamily => Some(StyleProperty::FontFamily),
            PanelItem::FontSize => Some(StyleProperty::FontSize),
            PanelItem::FontColor => Some(StyleProperty::FontColor),
            PanelItem::BackgroundColor => Some(StyleProperty::BackgroundColor),
            PanelItem::ContentWidth => Some(StyleProperty::ContentWidth),
            PanelItem::Rule | PanelItem::Reset | PanelItem::Apply => None,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            PanelItem::Reset => "Reset",
            PanelItem::Apply => "Apply",
            PanelItem::Rule => "",
            item => item.property().map_or("", StyleProperty::title),
        }
    }
}

/// Borrowed snapshot the renderer works from.
pub(crate) struct PanelView<'a> {
    pub(crate) selected: usize,
    pub(crate) draft: &'a crate::style_options::ArticleStyle,
}

#[must_use]
pub(crate) fn panel_width_for_terminal(cols: u16) -> u16 {
    cols.saturating_sub(crate::arrow_button::ARROW_WIDTH)
        .clamp(30, 44)
        .min(cols)
}

/// The panel occupies a full-height sidebar at the viewport's left edge,
/// like the article page's slide-in aside.
#[must_use]
pub(crate) fn panel_rect(viewport: Rect) -> Rect {
    Rect {
        x: viewport.x,
        y: viewport.y,
        width: panel_width_for_terminal(viewport.width),
        height: viewport.height,
    }
}

/// Map a pointer-down row to the panel item rendered there.
#[must_use]
pub(crate) fn item_at_row(panel: Rect, y: u16) -> Option<(usize, PanelItem)> {
    let rel = y.checked_sub(panel.y.saturating_add(PANEL_OPTION_START_ROW))?;
    let idx = usize::from(rel);
    PANEL_ITEMS.get(idx).map(|item| (idx, *item))
}

/// Cycle direction for a click on a select row: the left arrow cells step
/// backward, anywhere else steps forward.
#[must_use]
pub(crate) fn select_direction_for_click(rel_x: u16) -> i32 {
    if (VALUE_ZONE_REL_X..VALUE_ZONE_REL_X + 2).contains(&rel_x) {
        -1
    } else {
        1
    }
}

/// Which radio cell a click on the font-size row lands in, if any.
#[must_use]
pub(crate) fn radio_option_for_click(rel_x: u16, option_count: usize) -> Option<usize> {
    let rel = rel_x.checked_sub(VALUE_ZONE_REL_X)?;
    let idx = usize::from(rel / RADIO_CELL_WIDTH);
    (idx < option_count).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_one_row_per_property_plus_actions() {
        let property_rows = PANEL_ITEMS
            .iter()
            .filter(|item| item.property().is_some())
            .count();
        assert_eq!(property_rows, crate::style_options::STYLE_PROPERTIES.len());
        assert!(PANEL_ITEMS.contains(&PanelItem::Reset));
        assert!(PANEL_ITEMS.contains(&PanelItem::Apply));
    }

    #[test]
    fn rule_rows_are_not_selectable() {
        assert!(!PanelItem::Rule.is_selectable());
        assert!(PanelItem::Apply.is_selectable());
    }

    #[test]
    fn panel_width_clamps_for_small_and_large_terminals() {
        assert_eq!(panel_width_for_terminal(200), 44);
        assert_eq!(panel_width_for_terminal(80), 44);
        assert_eq!(panel_width_for_terminal(40), 37);
        assert_eq!(panel_width_for_terminal(20), 20);
    }

    #[test]
    fn item_at_row_maps_first_and_last_rows() {
        let panel = Rect::new(0, 0, 34, 24);
        assert_eq!(
            item_at_row(panel, PANEL_OPTION_START_ROW),
            Some((0, PanelItem::FontFamily))
        );
        let last = PANEL_ITEMS.len() as u16 - 1;
        assert_eq!(
            item_at_row(panel, PANEL_OPTION_START_ROW + last),
            Some((usize::from(last), PanelItem::Apply))
        );
    }

    #[test]
    fn item_at_row_rejects_chrome_rows() {
        let panel = Rect::new(0, 0, 34, 24);
        assert_eq!(item_at_row(panel, 0), None);
        assert_eq!(item_at_row(panel, PANEL_OPTION_START_ROW - 1), None);
        assert_eq!(
            item_at_row(panel, PANEL_OPTION_START_ROW + PANEL_ITEMS.len() as u16),
            None
        );
    }

    #[test]
    fn select_clicks_step_backward_only_on_the_left_arrow() {
        assert_eq!(select_direction_for_click(VALUE_ZONE_REL_X), -1);
        assert_eq!(select_direction_for_click(VALUE_ZONE_REL_X + 1), -1);
        assert_eq!(select_direction_for_click(VALUE_ZONE_REL_X + 2), 1);
        assert_eq!(select_direction_for_click(4), 1);
    }

    #[test]
    fn radio_clicks_map_to_cells_and_reject_the_label_zone() {
        assert_eq!(radio_option_for_click(VALUE_ZONE_REL_X, 3), Some(0));
        assert_eq!(
            radio_option_for_click(VALUE_ZONE_REL_X + RADIO_CELL_WIDTH, 3),
            Some(1)
        );
        assert_eq!(
            radio_option_for_click(VALUE_ZONE_REL_X + 3 * RADIO_CELL_WIDTH - 1, 3),
            Some(2)
        );
        assert_eq!(radio_option_for_click(4, 3), None);
        assert_eq!(
            radio_option_for_click(VALUE_ZONE_REL_X + 3 * RADIO_CELL_WIDTH, 3),
            None
        );
    }
}
