//! Path data builder for leaderlines and outlines.
//!
//! Paths are accumulated as typed commands and only turned into SVG path
//! syntax on display, so they can still be translated or measured after
//! construction.
//!
//! # Example
//!
//! ```
//! use pinout::render::PathData;
//!
//! let d = PathData::new().m(0.0, 0.0).l(40.0, 10.0);
//! assert_eq!(d.to_string(), "M 0 0 L 40 10");
//! ```

use std::fmt;

use glam::DVec2;

use super::svg::fmt_num;
use crate::types::BoundingCoords;

/// A single path command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo { c1: DVec2, c2: DVec2, to: DVec2 },
    ArcTo {
        radius: DVec2,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

impl PathCommand {
    fn translated(self, by: DVec2) -> PathCommand {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + by),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + by),
            PathCommand::CubicTo { c1, c2, to } => PathCommand::CubicTo {
                c1: c1 + by,
                c2: c2 + by,
                to: to + by,
            },
            PathCommand::ArcTo {
                radius,
                rotation,
                large_arc,
                sweep,
                to,
            } => PathCommand::ArcTo {
                radius,
                rotation,
                large_arc,
                sweep,
                to: to + by,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// Points that bound this command (control points included).
    fn points(&self) -> Vec<DVec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo { c1, c2, to } => vec![c1, c2, to],
            PathCommand::ArcTo { to, .. } => vec![to],
            PathCommand::Close => Vec::new(),
        }
    }
}

/// Builder for SVG path data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `(x, y)`
    pub fn m(self, x: f64, y: f64) -> Self {
        self.move_to(DVec2::new(x, y))
    }

    /// Line to `(x, y)`
    pub fn l(self, x: f64, y: f64) -> Self {
        self.line_to(DVec2::new(x, y))
    }

    /// Cubic Bézier through control points `(x1, y1)` and `(x2, y2)` to `(x, y)`
    pub fn c(self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.cubic_to(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x, y))
    }

    /// Elliptical arc to `(x, y)`
    #[allow(clippy::too_many_arguments)]
    pub fn a(self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.push(PathCommand::ArcTo {
            radius: DVec2::new(rx, ry),
            rotation,
            large_arc,
            sweep,
            to: DVec2::new(x, y),
        })
    }

    /// Close the current subpath
    pub fn z(self) -> Self {
        self.push(PathCommand::Close)
    }

    pub fn move_to(self, p: DVec2) -> Self {
        self.push(PathCommand::MoveTo(p))
    }

    pub fn line_to(self, p: DVec2) -> Self {
        self.push(PathCommand::LineTo(p))
    }

    pub fn cubic_to(self, c1: DVec2, c2: DVec2, to: DVec2) -> Self {
        self.push(PathCommand::CubicTo { c1, c2, to })
    }

    /// Circular arc of radius `r` (no rotation, small arc)
    pub fn arc_to(self, r: f64, sweep: bool, to: DVec2) -> Self {
        self.push(PathCommand::ArcTo {
            radius: DVec2::splat(r),
            rotation: 0.0,
            large_arc: false,
            sweep,
            to,
        })
    }

    fn push(mut self, cmd: PathCommand) -> Self {
        self.commands.push(cmd);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Copy of this path shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> PathData {
        let by = DVec2::new(dx, dy);
        PathData {
            commands: self.commands.iter().map(|c| c.translated(by)).collect(),
        }
    }

    /// Box around every end and control point, or `None` for an empty path.
    pub fn extents(&self) -> Option<BoundingCoords> {
        let mut pts = self.commands.iter().flat_map(PathCommand::points);
        let first = pts.next()?;
        let (min, max) = pts.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(BoundingCoords::new(min.x, min.y, max.x, max.y))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cmd in &self.commands {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::CubicTo { c1, c2, to } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    fmt_num(c1.x),
                    fmt_num(c1.y),
                    fmt_num(c2.x),
                    fmt_num(c2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )?,
                PathCommand::ArcTo {
                    radius,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {} {} {} {} {} {} {}",
                    fmt_num(radius.x),
                    fmt_num(radius.y),
                    fmt_num(rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt_num(to.x),
                    fmt_num(to.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}
