use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Eq for Point {}

/// Consistent with `==`: `-0.0` and `0.0` hash the same
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        //-0.0 + 0.0 == +0.0
        let x = (self.0 + 0.0).to_bits();
        let y = (self.1 + 0.0).to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

/// Formats a point as `{x y}`
impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} {}}}", self.0, self.1)
    }
}

/// Formats a sequence of points as `[{x0 y0} {x1 y1} ...]`
pub fn fmt_points(points: &[Point]) -> String {
    format!("[{}]", points.iter().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_matches_listing_format() {
        assert_eq!(Point(0.0, 0.0).to_string(), "{0 0}");
        assert_eq!(Point(-4.0, 5.5).to_string(), "{-4 5.5}");
        let listing = fmt_points(&[Point(0.0, 0.0), Point(3.0, 4.0), Point(1.0, 2.0)]);
        assert_eq!(listing, "[{0 0} {3 4} {1 2}]");
        assert_eq!(fmt_points(&[]), "[]");
    }

    #[test]
    fn value_identity() {
        let set: HashSet<Point> = [Point(1.0, 1.0), Point(1.0, 1.0), Point(2.0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);

        let zeros: HashSet<Point> = [Point(0.0, -0.0), Point(-0.0, 0.0), Point(0.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(zeros.len(), 1);
        assert_eq!(Point::from((1.0, 2.0)), Point(1.0, 2.0));
        assert_eq!(<(f64, f64)>::from(Point(1.0, 2.0)), (1.0, 2.0));
    }

    #[test]
    fn distances() {
        let a = Point(0.0, 0.0);
        let b = Point(3.0, 4.0);
        assert_eq!(a.sq_distance(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert!(!Point(f64::NAN, 0.0).is_finite());
    }
}
