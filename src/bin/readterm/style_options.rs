//! Style option tables so the panel and the article view share one source of truth.
//!
//! Each settable property owns a fixed set of labelled values. Style records
//! hold references into these sets, so an out-of-set field is unrepresentable
//! without going around the module.

use ratatui::style::{Color, Modifier};
use serde::Serialize;

/// One selectable entry in a style option set.
///
/// Equality is by `value`; the label and the terminal render datum carry no
/// identity.
#[derive(Debug, Serialize)]
pub(crate) struct OptionValue {
    pub(crate) value: &'static str,
    pub(crate) label: &'static str,
    #[serde(skip)]
    render: RenderHint,
}

/// How the article view realizes an option on a terminal cell grid.
#[derive(Debug, Clone, Copy)]
enum RenderHint {
    Family(Modifier),
    /// Blank lines between paragraphs.
    Size(u16),
    Foreground(Color),
    Background(Color),
    /// Preferred text column count.
    Width(u16),
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for OptionValue {}

impl OptionValue {
    pub(crate) fn family_modifier(&self) -> Modifier {
        match self.render {
            RenderHint::Family(modifier) => modifier,
            _ => Modifier::empty(),
        }
    }

    pub(crate) fn paragraph_gap(&self) -> u16 {
        match self.render {
            RenderHint::Size(gap) => gap,
            _ => 1,
        }
    }

    pub(crate) fn foreground(&self) -> Color {
        match self.render {
            RenderHint::Foreground(color) => color,
            _ => Color::Reset,
        }
    }

    pub(crate) fn background(&self) -> Color {
        match self.render {
            RenderHint::Background(color) => color,
            _ => Color::Reset,
        }
    }

    pub(crate) fn columns(&self) -> u16 {
        match self.render {
            RenderHint::Width(columns) => columns,
            _ => 80,
        }
    }
}

pub(crate) static FONT_FAMILY_OPTIONS: [OptionValue; 5] = [
    OptionValue {
        value: "open-sans",
        label: "Open Sans",
        render: RenderHint::Family(Modifier::empty()),
    },
    OptionValue {
        value: "ubuntu",
        label: "Ubuntu",
        render: RenderHint::Family(Modifier::BOLD),
    },
    OptionValue {
        value: "cormorant-garamond",
        label: "Cormorant Garamond",
        render: RenderHint::Family(Modifier::ITALIC),
    },
    OptionValue {
        value: "days-one",
        label: "Days One",
        render: RenderHint::Family(Modifier::BOLD.union(Modifier::ITALIC)),
    },
    OptionValue {
        value: "merriweather",
        label: "Merriweather",
        render: RenderHint::Family(Modifier::DIM),
    },
];

pub(crate) static FONT_SIZE_OPTIONS: [OptionValue; 3] = [
    OptionValue {
        value: "18px",
        label: "18px",
        render: RenderHint::Size(0),
    },
    OptionValue {
        value: "25px",
        label: "25px",
        render: RenderHint::Size(1),
    },
    OptionValue {
        value: "38px",
        label: "38px",
        render: RenderHint::Size(2),
    },
];

pub(crate) static FONT_COLOR_OPTIONS: [OptionValue; 6] = [
    OptionValue {
        value: "black",
        label: "Black",
        render: RenderHint::Foreground(Color::Black),
    },
    OptionValue {
        value: "white",
        label: "White",
        render: RenderHint::Foreground(Color::White),
    },
    OptionValue {
        value: "gray",
        label: "Gray",
        render: RenderHint::Foreground(Color::Gray),
    },
    OptionValue {
        value: "pink",
        label: "Pink",
        render: RenderHint::Foreground(Color::Magenta),
    },
    OptionValue {
        value: "turquoise",
        label: "Turquoise",
        render: RenderHint::Foreground(Color::Cyan),
    },
    OptionValue {
        value: "green",
        label: "Green",
        render: RenderHint::Foreground(Color::Green),
    },
];

pub(crate) static BACKGROUND_COLOR_OPTIONS: [OptionValue; 6] = [
    OptionValue {
        value: "white",
        label: "White",
        render: RenderHint::Background(Color::White),
    },
    OptionValue {
        value: "black",
        label: "Black",
        render: RenderHint::Background(Color::Black),
    },
    OptionValue {
        value: "gray",
        label: "Gray",
        render: RenderHint::Background(Color::Gray),
    },
    OptionValue {
        value: "pink",
        label: "Pink",
        render: RenderHint::Background(Color::Magenta),
    },
    OptionValue {
        value: "turquoise",
        label: "Turquoise",
        render: RenderHint::Background(Color::Cyan),
    },
    OptionValue {
        value: "green",
        label: "Green",
        render: RenderHint::Background(Color::Green),
    },
];

pub(crate) static CONTENT_WIDTH_OPTIONS: [OptionValue; 2] = [
    OptionValue {
        value: "wide",
        label: "Wide",
        render: RenderHint::Width(100),
    },
    OptionValue {
        value: "narrow",
        label: "Narrow",
        render: RenderHint::Width(64),
    },
];

/// A full article style: every field holds a member of its option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ArticleStyle {
    pub(crate) font_family: &'static OptionValue,
    pub(crate) font_size: &'static OptionValue,
    pub(crate) font_color: &'static OptionValue,
    pub(crate) background_color: &'static OptionValue,
    pub(crate) content_width: &'static OptionValue,
}

/// Initial and reset value for both the draft and the applied style.
pub(crate) static DEFAULT_ARTICLE_STYLE: ArticleStyle = ArticleStyle {
    font_family: &FONT_FAMILY_OPTIONS[0],
    font_size: &FONT_SIZE_OPTIONS[0],
    font_color: &FONT_COLOR_OPTIONS[0],
    background_color: &BACKGROUND_COLOR_OPTIONS[0],
    content_width: &CONTENT_WIDTH_OPTIONS[0],
};

/// The five settable properties, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StyleProperty {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

pub(crate) const STYLE_PROPERTIES: &[StyleProperty] = &[
    StyleProperty::FontFamily,
    StyleProperty::FontSize,
    StyleProperty::FontColor,
    StyleProperty::BackgroundColor,
    StyleProperty::ContentWidth,
];

impl StyleProperty {
    pub(crate) fn options(self) -> &'static [OptionValue] {
        match self {
            StyleProperty::FontFamily => &FONT_FAMILY_OPTIONS,
            StyleProperty::FontSize => &FONT_SIZE_OPTIONS,
            StyleProperty::FontColor => &FONT_COLOR_OPTIONS,
            StyleProperty::BackgroundColor => &BACKGROUND_COLOR_OPTIONS,
            StyleProperty::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            StyleProperty::FontFamily => "Font",
            StyleProperty::FontSize => "Font size",
            StyleProperty::FontColor => "Font color",
            StyleProperty::BackgroundColor => "Background",
            StyleProperty::ContentWidth => "Content width",
        }
    }

    pub(crate) fn current(self, style: &ArticleStyle) -> &'static OptionValue {
        match self {
            StyleProperty::FontFamily => style.font_family,
            StyleProperty::FontSize => style.font_size,
            StyleProperty::FontColor => style.font_color,
            StyleProperty::BackgroundColor => style.background_color,
            StyleProperty::ContentWidth => style.content_width,
        }
    }

    /// Replace exactly this property's field. `value` must come from this
    /// property's own option set; the controls only emit set members.
    pub(crate) fn replace(self, style: &mut ArticleStyle, value: &'static OptionValue) {
        debug_assert!(self.options().iter().any(|option| option == value));
        match self {
            StyleProperty::FontFamily => style.font_family = value,
            StyleProperty::FontSize => style.font_size = value,
            StyleProperty::FontColor => style.font_color = value,
            StyleProperty::BackgroundColor => style.background_color = value,
            StyleProperty::ContentWidth => style.content_width = value,
        }
    }
}
