//! Article content loading so the view renders structured text, not raw bytes.

use anyhow::{Context, Result};
use std::path::Path;

/// Bundled sample shown when no article file is given.
const SAMPLE_ARTICLE: &str = "\
Typography in the terminal

Terminals predate the idea that a reader might want a say in how text looks. \
A cell grid hands every glyph the same box, every line the same height, and \
calls the matter settled. Yet most of what makes long-form text readable \
survives the translation: measure, contrast, and rhythm are all still there \
to be tuned.

Measure is the width of a text block. Print typographers keep it near \
sixty-six characters; a full-width terminal paragraph runs well past two \
hundred. Narrowing the column is the single cheapest readability win this \
side of a font change.

Contrast in a terminal is a palette decision. Dark text on a light ground \
reads best in a bright room, and the inverse at night. A reader should be \
able to flip between the two without leaving the page.

Rhythm is spacing. Tight paragraphs suit reference material that is scanned, \
not read; generous gaps suit essays. Treating the gap as a size knob, the \
way print treats leading, keeps the choice with the reader.

None of this requires pixels. It requires the application to ask.";

/// A parsed article: a title line and its body paragraphs.
#[derive(Debug, Clone)]
pub(crate) struct Article {
    pub(crate) title: String,
    pub(crate) paragraphs: Vec<String>,
}

impl Article {
    /// Load from `path`, or fall back to the bundled sample.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given but cannot be read.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let text = match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read article {}", path.display()))?,
            None => SAMPLE_ARTICLE.to_string(),
        };
        Ok(Self::parse(&text))
    }

    /// First non-empty line is the title; blank lines separate paragraphs.
    fn parse(text: &str) -> Self {
        let mut blocks = text
            .split("\n\n")
            .map(|block| {
                block
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|block| !block.is_empty());
        let title = blocks.next().unwrap_or_else(|| "Untitled".to_string());
        let paragraphs = blocks.collect();
        Self { title, paragraphs }
    }
}
