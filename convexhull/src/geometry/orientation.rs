use robust::Coord;

use crate::geometry::primitives::Point;

/// Orientation of an ordered triple of points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Collinear,
    Clockwise,
}

/// Twice the signed area of the triangle (`a`, `b`, `c`).
///
/// Positive if `c` lies strictly left of the directed line `a`→`b` (counter-clockwise turn),
/// zero if the three points are collinear and negative for a right turn.
#[inline(always)]
pub fn signed_area2(a: Point, b: Point, c: Point) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)
}

/// Orientation of (`a`, `b`, `c`) with an exact sign.
///
/// Same convention as [`signed_area2`], but immune to rounding: nearly collinear triples for which
/// [`signed_area2`] rounds to zero or to the wrong sign are classified correctly.
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let det = robust::orient2d(coord(a), coord(b), coord(c));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

fn coord(p: Point) -> Coord<f64> {
    Coord { x: p.0, y: p.1 }
}

/// Strict left turn: collinear triples are *not* a left turn.
#[inline(always)]
pub fn is_left_turn(a: Point, b: Point, c: Point) -> bool {
    signed_area2(a, b, c) > 0.0
}
