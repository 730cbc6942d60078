//! Shape types for the diagram tree
//!
//! Each node type knows how to:
//! - Report its bounding box in its parent's coordinate space
//! - Track its own and inherited scale
//! - Render itself to a [`DrawCommand`]
//!
//! Leaves (`Rect`, `Path`, `Text`, `Image`) have a fixed declared size;
//! [`Group`] derives its size from its children.

use enum_dispatch::enum_dispatch;

use super::group::Group;
use super::path_builder::PathData;
use super::{DrawCommand, TextAnchor};
use crate::types::{BoundingCoords, Coords, extract_scale};

/// Position and scale state shared by every node.
///
/// `scale` is the node's own mirror; `inherited` is the product of every
/// ancestor's own scale, refreshed whenever an ancestor changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    scale: Coords,
    inherited: Coords,
}

impl Frame {
    pub fn new(x: f64, y: f64) -> Self {
        Frame {
            x,
            y,
            scale: Coords::ONE,
            inherited: Coords::ONE,
        }
    }

    pub fn position(&self) -> Coords {
        Coords::new(self.x, self.y)
    }

    pub fn local_scale(&self) -> Coords {
        self.scale
    }

    pub fn inherited_scale(&self) -> Coords {
        self.inherited
    }

    /// Own scale compounded with every ancestor's.
    pub fn effective_scale(&self) -> Coords {
        self.scale * self.inherited
    }

    /// Place a local box into the parent's space.
    pub fn place(&self, local: BoundingCoords) -> BoundingCoords {
        local.transform(self.position(), self.scale)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::new(0.0, 0.0)
    }
}

/// Common behavior for all nodes in the tree
///
/// Preconditions: a node is mutated only while it is being built. Geometry
/// queries always reflect the current children, but routing or layout that
/// has already read a node's bounds is not recomputed if the node changes
/// afterwards.
#[enum_dispatch]
pub trait Graphic {
    fn frame(&self) -> &Frame;

    fn frame_mut(&mut self) -> &mut Frame;

    /// Bounding box in the parent's coordinate space, always normalized.
    fn bounding_coords(&self) -> BoundingCoords;

    fn render(&self) -> DrawCommand;

    /// Push this node's effective scale down to its descendants.
    fn propagate_scale(&mut self) {}

    fn position(&self) -> Coords {
        self.frame().position()
    }

    fn set_position(&mut self, position: Coords) {
        let frame = self.frame_mut();
        frame.x = position.x;
        frame.y = position.y;
    }

    /// Effective scale: own scale compounded with all ancestors' scales.
    fn scale(&self) -> Coords {
        self.frame().effective_scale()
    }

    fn local_scale(&self) -> Coords {
        self.frame().local_scale()
    }

    /// Replace this node's own scale and re-derive every descendant.
    ///
    /// Only the signs of `scale` are kept: negative components mirror,
    /// anything else (zero included) is `+1`.
    fn set_scale(&mut self, scale: Coords) {
        self.frame_mut().scale = extract_scale(scale).1;
        self.propagate_scale();
    }

    /// Compound `scale` into this node, multiplying the effective scale of
    /// the node and all of its descendants by it.
    fn apply_scale(&mut self, scale: Coords) {
        let frame = self.frame_mut();
        frame.scale = frame.scale * extract_scale(scale).1;
        self.propagate_scale();
    }

    /// Called when the node is attached to (or re-scaled under) a parent
    /// whose effective scale is `parent`.
    fn inherit_scale(&mut self, parent: Coords) {
        self.frame_mut().inherited = parent;
        self.propagate_scale();
    }

    fn width(&self) -> f64 {
        self.bounding_coords().width()
    }

    fn height(&self) -> f64 {
        self.bounding_coords().height()
    }
}

/// Any node of the tree: one of the leaf shapes or a group
#[enum_dispatch(Graphic)]
#[derive(Debug, Clone)]
pub enum Node {
    Rect(Rect),
    Path(Path),
    Text(Text),
    Image(Image),
    Group(Group),
}

impl Node {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }
}

/// Bounds of a leaf with declared size, extending from its position in the
/// direction of its own scale.
fn leaf_bounds(frame: &Frame, width: f64, height: f64) -> BoundingCoords {
    frame.place(BoundingCoords::new(0.0, 0.0, width, height))
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle, optionally with rounded corners
#[derive(Debug, Clone)]
pub struct Rect {
    frame: Frame,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub class: Option<String>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            frame: Frame::new(x, y),
            width,
            height,
            corner_radius: 0.0,
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

impl Graphic for Rect {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bounding_coords(&self) -> BoundingCoords {
        leaf_bounds(&self.frame, self.width, self.height)
    }

    fn render(&self) -> DrawCommand {
        // The own scale is baked into where the box lands.
        let bc = self.bounding_coords();
        DrawCommand::Rect {
            x: bc.x1(),
            y: bc.y1(),
            width: bc.width(),
            height: bc.height(),
            corner_radius: self.corner_radius,
            class: self.class.clone(),
        }
    }
}

// ============================================================================
// Path
// ============================================================================

/// Path data drawn relative to the leaf's position
#[derive(Debug, Clone)]
pub struct Path {
    frame: Frame,
    pub width: f64,
    pub height: f64,
    pub d: PathData,
    pub class: Option<String>,
}

impl Path {
    pub fn new(x: f64, y: f64, width: f64, height: f64, d: PathData) -> Self {
        Self {
            frame: Frame::new(x, y),
            width,
            height,
            d,
            class: None,
        }
    }

    /// Wrap path data given in parent coordinates: the leaf is positioned at
    /// the path's top-left extent and the data is shifted to match. An empty
    /// path becomes a zero-size leaf at `fallback`.
    pub fn from_absolute(d: PathData, fallback: Coords) -> Self {
        match d.extents() {
            Some(ext) => {
                let local = d.translated(-ext.x1(), -ext.y1());
                Path::new(ext.x1(), ext.y1(), ext.width(), ext.height(), local)
            }
            None => Path::new(fallback.x, fallback.y, 0.0, 0.0, d),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Graphic for Path {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bounding_coords(&self) -> BoundingCoords {
        leaf_bounds(&self.frame, self.width, self.height)
    }

    fn render(&self) -> DrawCommand {
        DrawCommand::Path {
            x: self.frame.x,
            y: self.frame.y,
            scale: self.frame.local_scale(),
            d: self.d.to_string(),
            class: self.class.clone(),
        }
    }
}

// ============================================================================
// Text
// ============================================================================

/// Average glyph advance as a fraction of the font size.
pub const DEFAULT_CHAR_WIDTH: f64 = 0.6;

/// Estimate rendered text width from its character count.
pub fn estimate_text_width(content: &str, font_size: f64, char_width: f64) -> f64 {
    content.chars().count() as f64 * font_size * char_width
}

/// A single line of text, vertically centred on its anchor point
#[derive(Debug, Clone)]
pub struct Text {
    frame: Frame,
    pub content: String,
    pub font_size: f64,
    pub width: f64,
    pub anchor: TextAnchor,
    pub class: Option<String>,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64, font_size: f64) -> Self {
        let content = content.into();
        let width = estimate_text_width(&content, font_size, DEFAULT_CHAR_WIDTH);
        Self {
            frame: Frame::new(x, y),
            content,
            font_size,
            width,
            anchor: TextAnchor::Middle,
            class: None,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Re-estimate the width with a different glyph advance.
    pub fn with_char_width(mut self, char_width: f64) -> Self {
        self.width = estimate_text_width(&self.content, self.font_size, char_width);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Graphic for Text {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bounding_coords(&self) -> BoundingCoords {
        let lead = self.width * self.anchor.lead_fraction();
        let half_h = self.font_size / 2.0;
        self.frame
            .place(BoundingCoords::new(-lead, -half_h, self.width - lead, half_h))
    }

    fn render(&self) -> DrawCommand {
        let anchor = if self.frame.effective_scale().x < 0.0 {
            self.anchor.mirrored()
        } else {
            self.anchor
        };
        DrawCommand::Text {
            x: self.frame.x,
            y: self.frame.y,
            content: self.content.clone(),
            anchor,
            upright: self.frame.inherited_scale(),
            class: self.class.clone(),
        }
    }
}

// ============================================================================
// Image
// ============================================================================

/// An external image referenced by href; loading it is the sink's concern
#[derive(Debug, Clone)]
pub struct Image {
    frame: Frame,
    pub width: f64,
    pub height: f64,
    pub href: String,
    pub class: Option<String>,
}

impl Image {
    pub fn new(href: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            frame: Frame::new(x, y),
            width,
            height,
            href: href.into(),
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Graphic for Image {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bounding_coords(&self) -> BoundingCoords {
        leaf_bounds(&self.frame, self.width, self.height)
    }

    fn render(&self) -> DrawCommand {
        let bc = self.bounding_coords();
        DrawCommand::Image {
            x: bc.x1(),
            y: bc.y1(),
            width: bc.width(),
            height: bc.height(),
            href: self.href.clone(),
            class: self.class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIPS: [Coords; 4] = [
        Coords::new(1.0, 1.0),
        Coords::new(-1.0, 1.0),
        Coords::new(1.0, -1.0),
        Coords::new(-1.0, -1.0),
    ];

    #[test]
    fn rect_bounds_unscaled() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.bounding_coords(), BoundingCoords::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn mirrored_rect_lands_left_of_its_position() {
        let mut rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        rect.set_scale(Coords::new(-1.0, 1.0));
        let bc = rect.bounding_coords();
        assert_eq!(bc, BoundingCoords::new(-20.0, 20.0, 10.0, 60.0));
        assert_eq!(bc.width(), 30.0);
    }

    #[test]
    fn leaf_bounds_are_normalized_for_every_flip() {
        for flip in FLIPS {
            let mut rect = Rect::new(5.0, -5.0, 12.0, 8.0);
            rect.set_scale(flip);
            let bc = rect.bounding_coords();
            assert!(bc.x1() <= bc.x2(), "x inverted for {flip}");
            assert!(bc.y1() <= bc.y2(), "y inverted for {flip}");
            assert_eq!(bc.width(), 12.0);
            assert_eq!(bc.height(), 8.0);
        }
    }

    #[test]
    fn rect_render_uses_normalized_box() {
        let mut rect = Rect::new(10.0, 0.0, 30.0, 5.0).with_corner_radius(2.0).with_class("body");
        rect.set_scale(Coords::new(-1.0, 1.0));
        assert_eq!(
            rect.render(),
            DrawCommand::Rect {
                x: -20.0,
                y: 0.0,
                width: 30.0,
                height: 5.0,
                corner_radius: 2.0,
                class: Some("body".into()),
            }
        );
    }

    #[test]
    fn text_bounds_follow_anchor() {
        let text = Text::new("ABCD", 100.0, 50.0, 10.0);
        // 4 chars * 10 * 0.6
        assert_eq!(text.width, 24.0);
        assert_eq!(text.bounding_coords(), BoundingCoords::new(88.0, 45.0, 112.0, 55.0));

        let start = Text::new("ABCD", 100.0, 50.0, 10.0).with_anchor(TextAnchor::Start);
        assert_eq!(start.bounding_coords(), BoundingCoords::new(100.0, 45.0, 124.0, 55.0));
    }

    #[test]
    fn text_in_mirrored_frame_stays_upright() {
        let mut text = Text::new("GP0", 10.0, 5.0, 12.0).with_anchor(TextAnchor::Start);
        text.inherit_scale(Coords::new(-1.0, 1.0));
        match text.render() {
            DrawCommand::Text { anchor, upright, .. } => {
                assert_eq!(anchor, TextAnchor::End);
                assert_eq!(upright, Coords::new(-1.0, 1.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn path_from_absolute_shifts_to_extents() {
        let d = PathData::new().m(10.0, 20.0).l(40.0, 5.0);
        let path = Path::from_absolute(d, Coords::ZERO);
        assert_eq!(path.bounding_coords(), BoundingCoords::new(10.0, 5.0, 40.0, 20.0));
        assert_eq!(path.d.to_string(), "M 0 15 L 30 0");
    }

    #[test]
    fn empty_path_is_zero_size_at_fallback() {
        let path = Path::from_absolute(PathData::new(), Coords::new(3.0, 4.0));
        assert_eq!(path.bounding_coords(), BoundingCoords::new(3.0, 4.0, 3.0, 4.0));
        match path.render() {
            DrawCommand::Path { d, .. } => assert_eq!(d, ""),
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn image_keeps_href() {
        let image = Image::new("board.png", 0.0, 0.0, 200.0, 100.0);
        assert_eq!(image.bounding_coords(), BoundingCoords::new(0.0, 0.0, 200.0, 100.0));
        match image.render() {
            DrawCommand::Image { href, .. } => assert_eq!(href, "board.png"),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn nodes_dispatch_through_graphic() {
        let node: Node = Rect::new(0.0, 0.0, 4.0, 2.0).into();
        assert_eq!(node.width(), 4.0);
        assert!(node.as_group().is_none());
    }
}
