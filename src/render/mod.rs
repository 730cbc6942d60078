//! The positioned graphic tree and its render output
//!
//! This module is organized into submodules:
//! - `shapes`: the [`Graphic`] capability, leaf shapes and the [`Node`] variant
//! - `group`: containers with scale propagation and aggregate bounds
//! - `path_builder`: [`PathData`] for leaderlines and outlines
//! - `geometry`: leaderline path synthesis and rotation helpers
//! - `svg`: the SVG sink consuming a finished [`Document`]

pub mod geometry;
pub mod group;
pub mod path_builder;
pub mod shapes;
pub mod svg;

pub use group::Group;
pub use path_builder::{PathCommand, PathData};
pub use shapes::{Frame, Graphic, Image, Node, Path, Rect, Text};

use crate::types::{BoundingRect, Coords};

/// Horizontal alignment of a text leaf relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Fraction of the text width lying left of the anchor point.
    pub fn lead_fraction(self) -> f64 {
        match self {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => 0.5,
            TextAnchor::End => 1.0,
        }
    }

    /// Anchor to use once the text is drawn in a horizontally mirrored frame.
    pub fn mirrored(self) -> TextAnchor {
        match self {
            TextAnchor::Start => TextAnchor::End,
            TextAnchor::Middle => TextAnchor::Middle,
            TextAnchor::End => TextAnchor::Start,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A resolved drawing instruction produced by [`Graphic::render`].
///
/// Every value is final; a serializer only has to print them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Group {
        x: f64,
        y: f64,
        scale: Coords,
        class: Option<String>,
        children: Vec<DrawCommand>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        class: Option<String>,
    },
    Path {
        x: f64,
        y: f64,
        scale: Coords,
        d: String,
        class: Option<String>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        /// Counter-scale keeping glyphs upright inside mirrored groups.
        upright: Coords,
        class: Option<String>,
    },
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: String,
        class: Option<String>,
    },
}

impl DrawCommand {
    pub fn class(&self) -> Option<&str> {
        match self {
            DrawCommand::Group { class, .. }
            | DrawCommand::Rect { class, .. }
            | DrawCommand::Path { class, .. }
            | DrawCommand::Text { class, .. }
            | DrawCommand::Image { class, .. } => class.as_deref(),
        }
    }

    pub fn children(&self) -> &[DrawCommand] {
        match self {
            DrawCommand::Group { children, .. } => children,
            _ => &[],
        }
    }
}

/// The rendered diagram root
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub view_box: BoundingRect,
    /// Stylesheet hrefs, passed through untouched
    pub stylesheets: Vec<String>,
    pub children: Vec<DrawCommand>,
}
