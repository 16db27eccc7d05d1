//! Article rendering so the committed style is visible behind the panel.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::article::Article;
use crate::style_options::ArticleStyle;

/// Text column for the current width option, centered in the viewport.
#[must_use]
pub(crate) fn content_area(viewport: Rect, style: &ArticleStyle) -> Rect {
    let columns = style
        .content_width
        .columns()
        .min(viewport.width.saturating_sub(2));
    let x = viewport.x + viewport.width.saturating_sub(columns) / 2;
    Rect {
        x,
        y: viewport.y + 1,
        width: columns,
        height: viewport.height.saturating_sub(2),
    }
}

/// Paint the whole viewport in the article's background, then lay the title
/// and paragraphs into the centered text column.
pub(crate) fn render_article(
    article: &Article,
    style: &ArticleStyle,
    viewport: Rect,
    buf: &mut Buffer,
) {
    if viewport.width == 0 || viewport.height == 0 {
        return;
    }
    let base = Style::new()
        .fg(style.font_color.foreground())
        .bg(style.background_color.background());
    buf.set_style(viewport, base);

    let family = style.font_family.family_modifier();
    let gap = style.font_size.paragraph_gap();

    let mut lines: Vec<Line<'_>> = Vec::new();
    lines.push(Line::from(Span::styled(
        article.title.clone(),
        base.add_modifier(family | Modifier::BOLD),
    )));
    for paragraph in &article.paragraphs {
        for _ in 0..=gap {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            base.add_modifier(family),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(content_area(viewport, style), buf);
}
