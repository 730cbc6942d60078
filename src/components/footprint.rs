//! Integrated-circuit footprints: DIP and QFP pin placement
//!
//! A footprint is a `width` x `height` box whose inset margins hold the pin
//! legs. Pins are spread evenly along each side with
//! `pitch = (span - insets) / (pins_per_side + 1)`, then the whole
//! footprint is rotated about the body centre.

use glam::DVec2;

use super::panel::Inset;
use crate::config::{Config, FootprintConfig};
use crate::errors::{BuildError, Result};
use crate::render::geometry::{box_corners, polygon_path, rotate_about};
use crate::render::{Group, Path};
use crate::types::{BoundingCoords, Coords, finite, non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Package {
    /// Dual in-line: a row of pins down each of the left and right sides
    Dip,
    /// Quad flat: pins on all four sides, numbered counter-clockwise
    Qfp,
}

impl Package {
    pub fn sides(self) -> usize {
        match self {
            Package::Dip => 2,
            Package::Qfp => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Package::Dip => "DIP",
            Package::Qfp => "QFP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

#[derive(Debug, Clone)]
pub struct Footprint {
    package: Package,
    pin_count: usize,
    width: f64,
    height: f64,
    inset: Inset,
    rotation: f64,
    x: f64,
    y: f64,
}

impl Footprint {
    pub fn new(package: Package, pin_count: usize, width: f64, height: f64) -> Result<Self> {
        let sides = package.sides();
        if pin_count == 0 || pin_count % sides != 0 {
            return Err(BuildError::InvalidPinCount {
                package: package.name(),
                pin_count,
                sides,
            });
        }
        let width = non_negative(width).map_err(|e| BuildError::number(package.name(), "width", width, e))?;
        let height = non_negative(height).map_err(|e| BuildError::number(package.name(), "height", height, e))?;
        Ok(Self {
            package,
            pin_count,
            width,
            height,
            inset: Inset::default(),
            rotation: 0.0,
            x: 0.0,
            y: 0.0,
        })
    }

    pub fn dip(pin_count: usize, width: f64, height: f64) -> Result<Self> {
        Self::new(Package::Dip, pin_count, width, height)
    }

    pub fn qfp(pin_count: usize, width: f64, height: f64) -> Result<Self> {
        Self::new(Package::Qfp, pin_count, width, height)
    }

    /// Leg margins; the body outline is the box less these.
    pub fn with_inset(mut self, inset: Inset) -> Result<Self> {
        inset.validate(self.package.name())?;
        let spare = (self.width - inset.horizontal()).min(self.height - inset.vertical());
        non_negative(spare).map_err(|e| BuildError::number(self.package.name(), "inset", spare, e))?;
        self.inset = inset;
        Ok(self)
    }

    /// Rotation in degrees about the body centre.
    pub fn with_rotation(mut self, degrees: f64) -> Result<Self> {
        let package = self.package.name();
        self.rotation = finite(degrees).map_err(|e| BuildError::number(package, "rotation", degrees, e))?;
        Ok(self)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn package(&self) -> Package {
        self.package
    }

    pub fn pin_count(&self) -> usize {
        self.pin_count
    }

    pub fn pins_per_side(&self) -> usize {
        self.pin_count / self.package.sides()
    }

    /// Pin spacing along horizontal (`x`) and vertical (`y`) sides.
    pub fn pitch(&self) -> Coords {
        let slots = (self.pins_per_side() + 1) as f64;
        Coords::new(
            (self.width - self.inset.horizontal()) / slots,
            (self.height - self.inset.vertical()) / slots,
        )
    }

    fn centre(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Side and 1-based position along it for pin `pin`.
    fn locate(&self, pin: usize) -> Result<(Side, usize)> {
        if pin == 0 || pin > self.pin_count {
            return Err(BuildError::PinIndexOutOfRange {
                package: self.package.name(),
                index: pin,
                pin_count: self.pin_count,
            });
        }
        let per_side = self.pins_per_side();
        let side = match (self.package, (pin - 1) / per_side) {
            (_, 0) => Side::Left,
            (Package::Dip, _) => Side::Right,
            (Package::Qfp, 1) => Side::Bottom,
            (Package::Qfp, 2) => Side::Right,
            (Package::Qfp, _) => Side::Top,
        };
        Ok((side, (pin - 1) % per_side + 1))
    }

    /// Unrotated position of the leg centre for a side slot.
    fn slot_coords(&self, side: Side, j: usize) -> DVec2 {
        let pitch = self.pitch();
        let j = j as f64;
        let Inset {
            top,
            right,
            bottom,
            left,
        } = self.inset;
        match side {
            Side::Left => DVec2::new(left / 2.0, top + pitch.y * j),
            Side::Right if self.package == Package::Dip => {
                DVec2::new(self.width - right / 2.0, top + pitch.y * j)
            }
            Side::Right => DVec2::new(self.width - right / 2.0, self.height - bottom - pitch.y * j),
            Side::Bottom => DVec2::new(left + pitch.x * j, self.height - bottom / 2.0),
            Side::Top => DVec2::new(self.width - right - pitch.x * j, top / 2.0),
        }
    }

    /// Coordinates of pin `pin` (1-based) relative to the footprint's
    /// top-left corner, rotation applied.
    pub fn pin_coords(&self, pin: usize) -> Result<Coords> {
        let (side, j) = self.locate(pin)?;
        let p = self.slot_coords(side, j);
        Ok(rotate_about(p, self.centre(), self.rotation).into())
    }

    /// Every pin in numbering order.
    pub fn pins(&self) -> Result<Vec<Coords>> {
        (1..=self.pin_count).map(|n| self.pin_coords(n)).collect()
    }

    fn outline(&self, bounds: BoundingCoords, class: &str) -> Path {
        let centre = self.centre();
        let corners = box_corners(&bounds).map(|c| rotate_about(c, centre, self.rotation));
        Path::from_absolute(polygon_path(&corners), bounds.center()).with_class(class)
    }

    pub fn build(&self, config: &Config) -> Result<Group> {
        let section: FootprintConfig = config.section("footprint", None, None)?;
        let name = self.package.name();
        let mut group = Group::new(self.x, self.y).with_class(format!("footprint {}", name.to_lowercase()));

        let body = BoundingCoords::new(
            self.inset.left,
            self.inset.top,
            self.width - self.inset.right,
            self.height - self.inset.bottom,
        );
        group.add(self.outline(body, "footprint__body"));

        let (len, half_w) = (section.leg_length / 2.0, section.leg_width / 2.0);
        for pin in 1..=self.pin_count {
            let (side, j) = self.locate(pin)?;
            let c = self.slot_coords(side, j);
            let leg = match side {
                Side::Left | Side::Right => BoundingCoords::new(c.x - len, c.y - half_w, c.x + len, c.y + half_w),
                Side::Top | Side::Bottom => BoundingCoords::new(c.x - half_w, c.y - len, c.x + half_w, c.y + len),
            };
            group.add(self.outline(leg, "footprint__pin"));
        }

        let m = section.marker_size;
        let first = self.slot_coords(Side::Left, 1);
        let marker_x = body.x1() + m;
        let marker = BoundingCoords::new(marker_x, first.y - m / 2.0, marker_x + m, first.y + m / 2.0);
        group.add(self.outline(marker, "footprint__marker"));

        crate::log::debug!(package = name, pins = self.pin_count, rotation = self.rotation, "footprint built");
        Ok(group)
    }
}
