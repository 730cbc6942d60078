//! Legend: a panel of tagged swatches explaining label colours

use serde_json::Value;

use super::panel::{Inset, Panel, PanelBuilder};
use crate::config::{Config, LegendConfig};
use crate::errors::{BuildError, Result};
use crate::render::{Group, Rect, Text, TextAnchor};
use crate::types::non_negative;

#[derive(Debug, Clone)]
pub struct Legend {
    x: f64,
    y: f64,
    entries: Vec<(String, String)>,
    overrides: Option<Value>,
}

impl Legend {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            entries: Vec::new(),
            overrides: None,
        }
    }

    /// Add an entry whose swatch carries `tag` as its class.
    pub fn entry(mut self, content: impl Into<String>, tag: impl Into<String>) -> Self {
        self.entries.push((content.into(), tag.into()));
        self
    }

    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn build(&self, config: &Config) -> Result<Panel> {
        let section: LegendConfig = config.section("legend", None, self.overrides.as_ref())?;
        for (field, v) in [
            ("entry_height", section.entry_height),
            ("swatch_size", section.swatch_size),
            ("column_width", section.column_width),
        ] {
            non_negative(v).map_err(|e| BuildError::number("legend", field, v, e))?;
        }
        let per_column = match section.rows_per_column {
            Some(0) | None => self.entries.len().max(1),
            Some(n) => n,
        };

        let inset = Inset::from(section.inset);
        let mut panel = PanelBuilder::new(self.x, self.y).inset(inset).tag("legend");
        for (i, (content, tag)) in self.entries.iter().enumerate() {
            let (col, row) = (i / per_column, i % per_column);
            let x = col as f64 * section.column_width;
            let y = row as f64 * section.entry_height;

            let mut entry = Group::new(x, y).with_class(format!("legend__entry {tag}"));
            let swatch_y = (section.entry_height - section.swatch_size) / 2.0;
            entry.add(
                Rect::new(0.0, swatch_y, section.swatch_size, section.swatch_size)
                    .with_class(format!("legend__swatch {tag}")),
            );
            let text_x = section.swatch_size + section.gap;
            entry.add(
                Text::new(content.as_str(), text_x, section.entry_height / 2.0, section.text.font_size)
                    .with_char_width(section.text.char_width)
                    .with_anchor(TextAnchor::Start)
                    .with_class("legend__text"),
            );
            panel.add(entry);
        }

        // Rows are sized by entry height, not by what their glyphs cover.
        let rows = self.entries.len().min(per_column);
        let width = panel.content().content_bounds().x2().max(0.0) + inset.horizontal();
        let height = rows as f64 * section.entry_height + inset.vertical();

        crate::log::debug!(entries = self.entries.len(), per_column, "legend built");
        panel.size(width, height).build(config)
    }
}
