use crate::geometry::convex_hull::{ccw_from_pivot, hull_area};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtHull, HullOrder};

/// Exports a hull as returned by [`compute`](crate::geometry::convex_hull::compute),
/// listing its vertices in the requested `order`.
pub fn export(hull: &[Point], order: HullOrder) -> ExtHull {
    let vertices = match order {
        HullOrder::Stack => hull.to_vec(),
        HullOrder::Ccw => ccw_from_pivot(hull),
    };
    ExtHull {
        vertices: vertices.into_iter().map(|p| p.into()).collect(),
        order,
        area: hull_area(hull),
    }
}
