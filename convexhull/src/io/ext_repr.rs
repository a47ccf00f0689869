use serde::{Deserialize, Serialize};

/// External representation of a [`Point`](crate::geometry::primitives::Point) as an `(x, y)` pair.
pub type ExtPoint = (f64, f64);

/// External representation of a point collection, the input of a hull computation.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtPointSet {
    pub points: Vec<ExtPoint>,
}

/// Listing order of exported hull vertices
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HullOrder {
    /// As returned by the scan: last pushed vertex first, pivot last
    #[default]
    Stack,
    /// Counter-clockwise, starting at the pivot
    Ccw,
}

/// External representation of a computed convex hull.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtHull {
    /// Vertices of the hull, listed in `order`
    pub vertices: Vec<ExtPoint>,
    pub order: HullOrder,
    /// Area enclosed by the hull
    pub area: f64,
}
