use itertools::Itertools;
use log::error;
use ordered_float::OrderedFloat;

use crate::geometry::orientation::signed_area2;
use crate::geometry::primitives::Point;

//Various checks to verify the correctness of computed hulls
//Used in debug_assert!() blocks and tests

pub fn all_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.is_finite())
}

/// Whether `p` lies inside or on the boundary of the convex `polygon`.
/// The vertices may be listed in either rotational direction.
/// Polygons with fewer than 3 vertices are treated as a segment or a single point.
pub fn polygon_contains(polygon: &[Point], p: Point) -> bool {
    match polygon {
        [] => false,
        [a] => *a == p,
        [a, b] => {
            signed_area2(*a, *b, p) == 0.0
                && p.0 >= a.0.min(b.0)
                && p.0 <= a.0.max(b.0)
                && p.1 >= a.1.min(b.1)
                && p.1 <= a.1.max(b.1)
        }
        _ => {
            let areas = polygon
                .iter()
                .circular_tuple_windows()
                .map(|(a, b)| signed_area2(*a, *b, p))
                .collect_vec();
            areas.iter().all(|&a| a >= 0.0) || areas.iter().all(|&a| a <= 0.0)
        }
    }
}

/// Every point lies inside or on the boundary of the hull
pub fn hull_encloses(hull: &[Point], points: &[Point]) -> bool {
    match points.iter().find(|p| !polygon_contains(hull, **p)) {
        Some(p) => {
            error!("point {p} lies outside of the hull");
            false
        }
        None => true,
    }
}

/// Every hull vertex is one of the points (no points invented)
pub fn hull_is_subset(hull: &[Point], points: &[Point]) -> bool {
    hull.iter().all(|v| points.contains(v))
}

/// All consecutive vertex triples turn strictly in the same direction (no collinear vertices)
pub fn hull_is_strictly_convex(hull: &[Point]) -> bool {
    if hull.len() < 3 {
        return false;
    }
    let areas = hull
        .iter()
        .circular_tuple_windows()
        .map(|(a, b, c)| signed_area2(*a, *b, *c))
        .collect_vec();
    areas.iter().all(|&a| a > 0.0) || areas.iter().all(|&a| a < 0.0)
}

/// Whether `a` and `b` contain the same points (with multiplicity), in any order
pub fn same_point_set(a: &[Point], b: &[Point]) -> bool {
    let key = |p: &Point| (OrderedFloat(p.0), OrderedFloat(p.1));
    a.len() == b.len() && a.iter().map(key).sorted().eq(b.iter().map(key).sorted())
}
