//! Panel rendering so form state maps to a stable sidebar layout.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Widget};
use unicode_width::UnicodeWidthStr;

use super::items::{PanelItem, PanelView, PANEL_ITEMS, PANEL_OPTION_START_ROW, ROW_TEXT_REL_X};

const PANEL_TITLE: &str = "ARTICLE PARAMETERS";
const LABEL_WIDTH: usize = 13;

#[must_use]
pub(crate) fn panel_footer() -> &'static str {
    "Esc close | Up/Down move | Left/Right change | Enter select"
}

fn border_style() -> Style {
    Style::new().fg(Color::DarkGray)
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::new()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::Gray).bg(Color::Black)
    }
}

pub(crate) fn render_panel(view: &PanelView<'_>, panel: Rect, buf: &mut Buffer) {
    if panel.width < 10 || panel.height < PANEL_OPTION_START_ROW + 2 {
        return;
    }
    Clear.render(panel, buf);
    buf.set_style(panel, Style::new().fg(Color::Gray).bg(Color::Black));
    Block::bordered().border_style(border_style()).render(panel, buf);

    set_centered(
        buf,
        panel,
        1,
        PANEL_TITLE,
        Style::new()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    draw_rule(buf, panel, 2);

    for (idx, item) in PANEL_ITEMS.iter().enumerate() {
        let row = PANEL_OPTION_START_ROW + idx as u16;
        if row + 1 >= panel.height {
            break;
        }
        render_row(view, *item, idx, panel, row, buf);
    }

    let footer_row = panel.height - 2;
    if footer_row > PANEL_OPTION_START_ROW + PANEL_ITEMS.len() as u16 {
        set_centered(
            buf,
            panel,
            footer_row,
            panel_footer(),
            Style::new().fg(Color::DarkGray).bg(Color::Black),
        );
    }
}

fn render_row(
    view: &PanelView<'_>,
    item: PanelItem,
    idx: usize,
    panel: Rect,
    row: u16,
    buf: &mut Buffer,
) {
    let selected = idx == view.selected;
    let marker = if selected { "\u{203a}" } else { " " };

    match item {
        PanelItem::Rule => draw_rule(buf, panel, row),
        PanelItem::Reset | PanelItem::Apply => {
            let text = format!("{marker} [ {} ]", item.label());
            let style = if selected {
                Style::new()
                    .fg(Color::Yellow)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                row_style(false)
            };
            set_centered(buf, panel, row, &text, style);
        }
        PanelItem::FontSize => {
            let property = crate::style_options::StyleProperty::FontSize;
            let current = property.current(view.draft);
            let mut text = format!("{marker} {:<LABEL_WIDTH$} ", item.label());
            for option in property.options() {
                let mark = if option == current { "(\u{2022})" } else { "( )" };
                text.push_str(&format!("{mark}{:<6}", option.label));
            }
            set_row_text(buf, panel, row, &text, row_style(selected));
        }
        item => {
            let Some(property) = item.property() else {
                return;
            };
            let value = property.current(view.draft).label;
            let text = format!(
                "{marker} {:<LABEL_WIDTH$} \u{25c2} {value} \u{25b8}",
                item.label()
            );
            set_row_text(buf, panel, row, &text, row_style(selected));
        }
    }
}

fn inner_width(panel: Rect) -> usize {
    panel.width.saturating_sub(2) as usize
}

fn set_row_text(buf: &mut Buffer, panel: Rect, row: u16, text: &str, style: Style) {
    let max = inner_width(panel).saturating_sub(usize::from(ROW_TEXT_REL_X) - 1);
    buf.set_stringn(panel.x + ROW_TEXT_REL_X, panel.y + row, text, max, style);
}

fn set_centered(buf: &mut Buffer, panel: Rect, row: u16, text: &str, style: Style) {
    let width = UnicodeWidthStr::width(text).min(inner_width(panel));
    let pad = (inner_width(panel) - width) / 2;
    buf.set_stringn(
        panel.x + 1 + pad as u16,
        panel.y + row,
        text,
        inner_width(panel),
        style,
    );
}

fn draw_rule(buf: &mut Buffer, panel: Rect, row: u16) {
    let line = format!(
        "\u{251c}{}\u{2524}",
        "\u{2500}".repeat(inner_width(panel))
    );
    buf.set_string(panel.x, panel.y + row, line, border_style());
}
