//! Panels: padded frames with painted backgrounds

use serde_json::Value;

use crate::config::{Config, PanelConfig};
use crate::errors::{BuildError, Result};
use crate::render::{Graphic, Group, Node, Rect};
use crate::types::{BoundingRect, non_negative};

/// Padding on each side of a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Inset {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Build from edge offsets given as `(x1, y1, x2, y2)`:
    /// left, top, right, bottom.
    pub const fn from_edges(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(y1, x2, y2, x1)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn validate(&self, component: &str) -> Result<()> {
        for (field, v) in [
            ("inset.top", self.top),
            ("inset.right", self.right),
            ("inset.bottom", self.bottom),
            ("inset.left", self.left),
        ] {
            non_negative(v).map_err(|e| BuildError::number(component, field, v, e))?;
        }
        Ok(())
    }
}

impl From<[f64; 4]> for Inset {
    /// `[top, right, bottom, left]`
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Inset::new(top, right, bottom, left)
    }
}

/// Collects panel content, then commits it behind its backgrounds.
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    x: f64,
    y: f64,
    size: Option<(f64, f64)>,
    inset: Option<Inset>,
    tag: Option<String>,
    overrides: Option<Value>,
    content: Group,
}

impl PanelBuilder {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: None,
            inset: None,
            tag: None,
            overrides: None,
            content: Group::new(0.0, 0.0).with_class("panel__content"),
        }
    }

    /// Fixed outer size; without it the panel wraps its content.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Padding between the outer and inner frames; defaults to the configured one.
    pub fn inset(mut self, inset: Inset) -> Self {
        self.inset = Some(inset);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn fixed_size(&self) -> Option<(f64, f64)> {
        self.size
    }

    /// Add content positioned relative to the inner frame.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Node {
        self.content.add(child)
    }

    pub fn content(&self) -> &Group {
        &self.content
    }

    pub fn build(self, config: &Config) -> Result<Panel> {
        let section: PanelConfig = config.section("panel", self.tag.as_deref(), self.overrides.as_ref())?;
        let inset = self.inset.unwrap_or_else(|| Inset::from(section.inset));
        inset.validate("panel")?;

        let (width, height) = match self.size {
            Some((w, h)) => (w, h),
            None => {
                let bc = self.content.content_bounds();
                (bc.x2().max(0.0) + inset.horizontal(), bc.y2().max(0.0) + inset.vertical())
            }
        };
        let width = non_negative(width).map_err(|e| BuildError::number("panel", "width", width, e))?;
        let height = non_negative(height).map_err(|e| BuildError::number("panel", "height", height, e))?;
        let inner_w = width - inset.horizontal();
        let inner_h = height - inset.vertical();
        non_negative(inner_w).map_err(|e| BuildError::number("panel", "inner width", inner_w, e))?;
        non_negative(inner_h).map_err(|e| BuildError::number("panel", "inner height", inner_h, e))?;

        let class = match &self.tag {
            Some(tag) => format!("panel {tag}"),
            None => "panel".to_string(),
        };
        let mut group = Group::new(self.x, self.y).with_class(class);
        let mut content = self.content;
        content.set_position((inset.left, inset.top).into());
        group.add(content);

        // Paint order: outer background, inner background, then content.
        group.add_behind(
            Rect::new(inset.left, inset.top, inner_w, inner_h)
                .with_corner_radius(section.corner_radius)
                .with_class("panel__inner"),
        );
        group.add_behind(
            Rect::new(0.0, 0.0, width, height)
                .with_corner_radius(section.corner_radius)
                .with_class("panel__bg"),
        );

        crate::log::debug!(x = self.x, y = self.y, width, height, "panel built");
        Ok(Panel {
            group,
            outer: BoundingRect::new(self.x, self.y, width, height),
            inner: BoundingRect::new(self.x + inset.left, self.y + inset.top, inner_w, inner_h),
        })
    }
}

/// A committed panel and its two frames in parent coordinates
#[derive(Debug, Clone)]
pub struct Panel {
    group: Group,
    outer: BoundingRect,
    inner: BoundingRect,
}

impl Panel {
    pub fn outer(&self) -> BoundingRect {
        self.outer
    }

    /// Content placement area: the outer frame less its inset.
    pub fn inner(&self) -> BoundingRect {
        self.inner
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn into_group(self) -> Group {
        self.group
    }
}

impl From<Panel> for Node {
    fn from(panel: Panel) -> Node {
        Node::Group(panel.group)
    }
}
