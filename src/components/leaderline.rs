//! Leaderlines: routed connectors between two sibling components
//!
//! A [`Leaderline`] owns no geometry. It is a routing recipe (style plus a
//! two-character direction code) applied to the bounding boxes of an origin
//! and a destination once both are final. Routing reads the boxes at call
//! time; moving either endpoint afterwards does not update the path.

use std::fmt;

use crate::config::LeaderlineConfig;
use crate::errors::{BuildError, Result};
use crate::render::geometry::{self, Axis};
use crate::render::{Graphic, Path, PathData};
use crate::types::{BoundingCoords, Coords};

/// Path shape drawn between the two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderlineStyle {
    Straight,
    Angled,
    Curved,
    Diagonal,
}

impl LeaderlineStyle {
    pub fn from_name(name: &str) -> Option<LeaderlineStyle> {
        match name {
            "straight" => Some(LeaderlineStyle::Straight),
            "angled" => Some(LeaderlineStyle::Angled),
            "curved" => Some(LeaderlineStyle::Curved),
            "diagonal" => Some(LeaderlineStyle::Diagonal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaderlineStyle::Straight => "straight",
            LeaderlineStyle::Angled => "angled",
            LeaderlineStyle::Curved => "curved",
            LeaderlineStyle::Diagonal => "diagonal",
        }
    }
}

/// Exit axis from the origin and entry axis into the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub exit: Axis,
    pub entry: Axis,
}

impl Direction {
    pub const HH: Direction = Direction {
        exit: Axis::Horizontal,
        entry: Axis::Horizontal,
    };
    pub const HV: Direction = Direction {
        exit: Axis::Horizontal,
        entry: Axis::Vertical,
    };
    pub const VH: Direction = Direction {
        exit: Axis::Vertical,
        entry: Axis::Horizontal,
    };
    pub const VV: Direction = Direction {
        exit: Axis::Vertical,
        entry: Axis::Vertical,
    };

    /// Parse a code such as `"hv"`. Anything but exactly two characters
    /// from `{h, v}` is rejected.
    pub fn parse(code: &str) -> Option<Direction> {
        let mut chars = code.chars();
        let exit = Axis::from_char(chars.next()?)?;
        let entry = Axis::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Direction { exit, entry })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.exit.as_char(), self.entry.as_char())
    }
}

/// A routed leaderline: its endpoints and path data, in the coordinate
/// space shared by origin and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub start: Coords,
    pub end: Coords,
    pub d: PathData,
}

impl Route {
    /// Wrap the route as a path leaf.
    pub fn into_path(self, class: Option<&str>) -> Path {
        let classes = match class {
            Some(c) => format!("leaderline {c}"),
            None => "leaderline".to_string(),
        };
        Path::from_absolute(self.d, self.start).with_class(classes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaderline {
    /// `None` when a lenient build swallowed an unknown style or direction;
    /// such a leaderline draws nothing.
    shape: Option<(LeaderlineStyle, Direction)>,
    pub class: Option<String>,
}

impl Leaderline {
    pub fn new(style: LeaderlineStyle, direction: Direction) -> Self {
        Self {
            shape: Some((style, direction)),
            class: None,
        }
    }

    pub fn straight() -> Self {
        Self::new(LeaderlineStyle::Straight, Direction::HH)
    }

    pub fn curved(direction: Direction) -> Self {
        Self::new(LeaderlineStyle::Curved, direction)
    }

    /// Validate configured style and direction names.
    ///
    /// With `strict` unset, an unknown name is logged and yields a
    /// leaderline that routes to an empty path.
    pub fn from_config(config: &LeaderlineConfig, strict: bool, component: &str) -> Result<Self> {
        let style = LeaderlineStyle::from_name(&config.style);
        let direction = Direction::parse(&config.direction);
        match (style, direction) {
            (Some(style), Some(direction)) => Ok(Self::new(style, direction)),
            (None, _) if strict => Err(BuildError::UnknownStyle {
                component: component.to_string(),
                style: config.style.clone(),
            }),
            (_, None) if strict => Err(BuildError::UnknownDirection {
                component: component.to_string(),
                code: config.direction.clone(),
            }),
            _ => {
                crate::log::warn!(
                    component,
                    style = %config.style,
                    direction = %config.direction,
                    "unknown leaderline setting, drawing nothing"
                );
                Ok(Self {
                    shape: None,
                    class: None,
                })
            }
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(&self) -> Option<LeaderlineStyle> {
        self.shape.map(|(style, _)| style)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.shape.map(|(_, direction)| direction)
    }

    /// Route between two siblings. Both must already be positioned and
    /// sized in the same parent.
    pub fn route(&self, origin: &impl Graphic, destination: &impl Graphic) -> Route {
        self.route_bounds(&origin.bounding_coords(), &destination.bounding_coords())
    }

    pub fn route_bounds(&self, origin: &BoundingCoords, destination: &BoundingCoords) -> Route {
        let direction = self.direction().unwrap_or(Direction::HH);
        let start = geometry::exit_point(origin, direction.exit);
        let end = geometry::entry_point(destination, direction.entry);

        let d = match self.shape {
            _ if start == end => PathData::new(),
            None => PathData::new(),
            Some((LeaderlineStyle::Straight, _)) => geometry::straight_path(start, end),
            Some((LeaderlineStyle::Angled, dir)) => geometry::angled_path(start, end, dir.exit, dir.entry),
            Some((LeaderlineStyle::Curved, dir)) => geometry::curved_path(start, end, dir.exit, dir.entry),
            Some((LeaderlineStyle::Diagonal, _)) => geometry::diagonal_path(start, end),
        };
        Route {
            start: start.into(),
            end: end.into(),
            d,
        }
    }

    /// Route and wrap the result as a path leaf carrying this leaderline's class.
    pub fn path_between(&self, origin: &impl Graphic, destination: &impl Graphic) -> Path {
        self.route(origin, destination).into_path(self.class.as_deref())
    }
}
