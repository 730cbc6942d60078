//! Annotations: free-standing callouts pointing at a spot on the diagram

use serde_json::Value;

use super::leaderline::Leaderline;
use super::text_block::TextBlock;
use crate::config::{AnnotationConfig, Config};
use crate::errors::{BuildError, Result};
use crate::render::{Graphic, Group, Rect};
use crate::types::{Coords, extract_scale, non_negative};

#[derive(Debug, Clone)]
pub struct Annotation {
    target: Coords,
    offset: Coords,
    content: String,
    tag: Option<String>,
    overrides: Option<Value>,
}

impl Annotation {
    /// Point at `target` with the body `offset` away from it.
    ///
    /// The offset's signs pick the quadrant: `(-60, 40)` puts the body 60
    /// left and 40 below the target, mirroring the whole callout so its
    /// text still reads left to right.
    pub fn new(target: Coords, offset: Coords, content: impl Into<String>) -> Self {
        Self {
            target,
            offset,
            content: content.into(),
            tag: None,
            overrides: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn build(&self, config: &Config) -> Result<Group> {
        let section: AnnotationConfig =
            config.section("annotation", self.tag.as_deref(), self.overrides.as_ref())?;
        for (field, v) in [
            ("marker_size", section.marker_size),
            ("padding", section.padding),
            ("body.width", section.body.width),
        ] {
            non_negative(v).map_err(|e| BuildError::number("annotation", field, v, e))?;
        }
        let leaderline = Leaderline::from_config(&section.leaderline, config.strict(), "annotation")?;
        let (offset, scale) = extract_scale(self.offset);

        let class = match &self.tag {
            Some(tag) => format!("annotation {tag}"),
            None => "annotation".to_string(),
        };
        let mut group = Group::new(self.target.x, self.target.y).with_class(class);

        let m = section.marker_size;
        let marker = Rect::new(-m / 2.0, -m / 2.0, m, m).with_class("annotation__marker");

        let pad = section.padding;
        let text = TextBlock::new(&self.content, pad, pad)
            .with_config(&section.text)
            .with_class("annotation__text");
        let mut body = Group::new(offset.x, offset.y).with_class("annotation__body");
        body.add(
            Rect::new(0.0, 0.0, section.body.width, text.height() + 2.0 * pad)
                .with_corner_radius(section.body.corner_radius),
        );
        body.add(text.build());

        group.add(leaderline.path_between(&marker, &body));
        group.add(marker);
        group.add(body);
        group.set_scale(scale);

        crate::log::debug!(x = self.target.x, y = self.target.y, "annotation built");
        Ok(group)
    }
}
