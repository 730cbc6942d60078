//! Multi-line text laid out as a group of single-line leaves

use crate::config::TextConfig;
use crate::render::shapes::estimate_text_width;
use crate::render::{Group, Text, TextAnchor};

#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<String>,
    x: f64,
    y: f64,
    anchor: TextAnchor,
    text: TextConfig,
    class: Option<String>,
}

impl TextBlock {
    /// Split `content` on newlines; the block's top edge is at `y`.
    pub fn new(content: &str, x: f64, y: f64) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
            x,
            y,
            anchor: TextAnchor::Start,
            text: TextConfig::default(),
            class: None,
        }
    }

    pub fn with_config(mut self, text: &TextConfig) -> Self {
        self.text = text.clone();
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Distance between consecutive baselines.
    pub fn line_advance(&self) -> f64 {
        self.text.font_size * self.text.line_height
    }

    pub fn height(&self) -> f64 {
        self.lines.len() as f64 * self.line_advance()
    }

    /// Widest estimated line.
    pub fn width(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| estimate_text_width(l, self.text.font_size, self.text.char_width))
            .fold(0.0, f64::max)
    }

    pub fn build(self) -> Group {
        let advance = self.line_advance();
        let mut group = Group::new(self.x, self.y).with_class(match &self.class {
            Some(c) => format!("textblock {c}"),
            None => "textblock".to_string(),
        });
        for (i, line) in self.lines.into_iter().enumerate() {
            let text = Text::new(line, 0.0, (i as f64 + 0.5) * advance, self.text.font_size)
                .with_char_width(self.text.char_width)
                .with_anchor(self.anchor);
            group.add(text);
        }
        group
    }
}
