//! Geometry functions: leaderline path shapes, arc corners and rotation

use glam::{DVec2, dvec2};

use super::path_builder::PathData;
use crate::types::BoundingCoords;

/// Axis along which a leaderline leaves its origin or enters its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_char(c: char) -> Option<Axis> {
        match c {
            'h' => Some(Axis::Horizontal),
            'v' => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Axis::Horizontal => 'h',
            Axis::Vertical => 'v',
        }
    }
}

/// Sign of `v`, with zero staying zero (unlike `f64::signum`).
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Point where a leaderline leaves `bounds`: right edge centre for a
/// horizontal exit, bottom edge centre for a vertical one.
pub fn exit_point(bounds: &BoundingCoords, axis: Axis) -> DVec2 {
    let c = bounds.center();
    match axis {
        Axis::Horizontal => dvec2(bounds.x2(), c.y),
        Axis::Vertical => dvec2(c.x, bounds.y2()),
    }
}

/// Point where a leaderline enters `bounds`: left edge centre for a
/// horizontal entry, top edge centre for a vertical one.
pub fn entry_point(bounds: &BoundingCoords, axis: Axis) -> DVec2 {
    let c = bounds.center();
    match axis {
        Axis::Horizontal => dvec2(bounds.x1(), c.y),
        Axis::Vertical => dvec2(c.x, bounds.y1()),
    }
}

pub fn straight_path(start: DVec2, end: DVec2) -> PathData {
    PathData::new().move_to(start).line_to(end)
}

/// Corner shared by the two runs of a mixed-axis route.
fn mixed_corner(start: DVec2, end: DVec2, exit: Axis) -> DVec2 {
    match exit {
        Axis::Horizontal => dvec2(end.x, start.y),
        Axis::Vertical => dvec2(start.x, end.y),
    }
}

/// Right-angle route. Mixed axes turn once; same-axis routes jog across at
/// a quarter of the run.
pub fn angled_path(start: DVec2, end: DVec2, exit: Axis, entry: Axis) -> PathData {
    let path = PathData::new().move_to(start);
    match (exit, entry) {
        (Axis::Horizontal, Axis::Horizontal) => {
            let x = start.x + (end.x - start.x) / 4.0;
            path.l(x, start.y).l(x, end.y).line_to(end)
        }
        (Axis::Vertical, Axis::Vertical) => {
            let y = start.y + (end.y - start.y) / 4.0;
            path.l(start.x, y).l(end.x, y).line_to(end)
        }
        _ => path.line_to(mixed_corner(start, end, exit)).line_to(end),
    }
}

/// Smooth route. Same-axis routes are a cubic ending in a straight lead-in
/// of 1/8 of the run; mixed axes get one rounded corner of radius
/// `min(|dx|, |dy|) / 3`.
pub fn curved_path(start: DVec2, end: DVec2, exit: Axis, entry: Axis) -> PathData {
    let path = PathData::new().move_to(start);
    match (exit, entry) {
        (Axis::Horizontal, Axis::Horizontal) => {
            let lead = (end.x - start.x) / 8.0;
            let curve_end = dvec2(end.x - lead, end.y);
            let half = (curve_end.x - start.x) / 2.0;
            path.cubic_to(
                dvec2(start.x + half, start.y),
                dvec2(curve_end.x - half, end.y),
                curve_end,
            )
            .line_to(end)
        }
        (Axis::Vertical, Axis::Vertical) => {
            let lead = (end.y - start.y) / 8.0;
            let curve_end = dvec2(end.x, end.y - lead);
            let half = (curve_end.y - start.y) / 2.0;
            path.cubic_to(
                dvec2(start.x, start.y + half),
                dvec2(end.x, curve_end.y - half),
                curve_end,
            )
            .line_to(end)
        }
        _ => {
            let delta = (end - start).abs();
            let r = delta.x.min(delta.y) / 3.0;
            if r == 0.0 {
                return path.line_to(end);
            }
            let corner = mixed_corner(start, end, exit);
            arc_corner(path, start, corner, end, r).line_to(end)
        }
    }
}

/// 45° run covering `min(|dx|, |dy|)`, blended by an arc into a final
/// straight run along the longer axis.
pub fn diagonal_path(start: DVec2, end: DVec2) -> PathData {
    let delta = end - start;
    let (adx, ady) = (delta.x.abs(), delta.y.abs());
    let m = adx.min(ady);
    if m == 0.0 || adx == ady {
        return straight_path(start, end);
    }

    let knee = start + dvec2(sign(delta.x) * m, sign(delta.y) * m);
    // tangent length equals `segment` for a 45° turn with this radius
    let segment = (m / 6.0).min((adx - ady).abs());
    let r = segment * 67.5_f64.to_radians().tan();
    arc_corner(PathData::new().move_to(start), start, knee, end, r).line_to(end)
}

/// Replace the corner at `corner` (between runs `from -> corner -> to`)
/// with a circular arc of radius `r`. Leaves the path at the arc's end.
pub fn arc_corner(path: PathData, from: DVec2, corner: DVec2, to: DVec2, r: f64) -> PathData {
    let d_in = (corner - from).normalize_or_zero();
    let d_out = (to - corner).normalize_or_zero();
    let turn = d_in.perp_dot(d_out).atan2(d_in.dot(d_out)).abs();
    if turn == 0.0 || r <= 0.0 {
        return path.line_to(corner);
    }
    let tangent = r * (turn / 2.0).tan();
    let sweep = d_in.perp_dot(d_out) > 0.0;
    path.line_to(corner - d_in * tangent)
        .arc_to(r, sweep, corner + d_out * tangent)
}

/// Rotate `p` about `centre` by `degrees` (positive turns +x toward +y).
pub fn rotate_about(p: DVec2, centre: DVec2, degrees: f64) -> DVec2 {
    if degrees == 0.0 {
        return p;
    }
    centre + DVec2::from_angle(degrees.to_radians()).rotate(p - centre)
}

/// Corners of `bounds`, clockwise on screen from the top-left.
pub fn box_corners(bounds: &BoundingCoords) -> [DVec2; 4] {
    [
        dvec2(bounds.x1(), bounds.y1()),
        dvec2(bounds.x2(), bounds.y1()),
        dvec2(bounds.x2(), bounds.y2()),
        dvec2(bounds.x1(), bounds.y2()),
    ]
}

/// Closed outline through `points`.
pub fn polygon_path(points: &[DVec2]) -> PathData {
    let Some((first, rest)) = points.split_first() else {
        return PathData::new();
    };
    rest.iter()
        .fold(PathData::new().move_to(*first), |path, p| path.line_to(*p))
        .z()
}
