//! The diagram root: explicit page size, view box and stylesheets

use super::panel::Panel;
use crate::errors::{BuildError, RenderError, Result};
use crate::render::{Document, Graphic, Group, Node, svg};
use crate::types::{BoundingCoords, BoundingRect, non_negative};

#[derive(Debug, Clone)]
pub struct Diagram {
    width: f64,
    height: f64,
    view_box: Option<BoundingRect>,
    stylesheets: Vec<String>,
    root: Group,
}

impl Diagram {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let width = non_negative(width).map_err(|e| BuildError::number("diagram", "width", width, e))?;
        let height = non_negative(height).map_err(|e| BuildError::number("diagram", "height", height, e))?;
        Ok(Self {
            width,
            height,
            view_box: None,
            stylesheets: Vec::new(),
            root: Group::new(0.0, 0.0),
        })
    }

    /// Visible region in user units; defaults to `0 0 width height`.
    pub fn with_view_box(mut self, view_box: BoundingRect) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Reference a stylesheet; the href is emitted untouched.
    pub fn add_stylesheet(&mut self, href: impl Into<String>) {
        self.stylesheets.push(href.into());
    }

    pub fn add(&mut self, child: impl Into<Node>) -> &mut Node {
        self.root.add(child)
    }

    pub fn add_panel(&mut self, panel: Panel) -> &mut Node {
        self.root.add(panel)
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extent of everything drawn, which may exceed the page.
    pub fn bounding_coords(&self) -> BoundingCoords {
        self.root.bounding_coords()
    }

    /// Resolve the tree into a document. Fails before producing anything
    /// if the page size or any bounds are unusable.
    pub fn render(&self) -> Result<Document, RenderError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(RenderError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.bounding_coords().is_finite() {
            return Err(RenderError::InvalidBounds);
        }
        let view_box = self
            .view_box
            .unwrap_or_else(|| BoundingRect::new(0.0, 0.0, self.width, self.height));

        crate::log::debug!(
            width = self.width,
            height = self.height,
            children = self.root.len(),
            "rendering diagram"
        );
        Ok(Document {
            width: self.width,
            height: self.height,
            view_box,
            stylesheets: self.stylesheets.clone(),
            children: self.root.children().iter().map(Graphic::render).collect(),
        })
    }

    pub fn to_svg(&self) -> Result<String, RenderError> {
        svg::to_svg(&self.render()?)
    }
}
