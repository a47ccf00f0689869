use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use crate::geometry::orientation::{Orientation, is_left_turn, orientation};
use crate::geometry::point_stack::PointStack;
use crate::geometry::primitives::{Point, fmt_points};
use crate::util::assertions;

/// Computes the convex hull of `points` using the Graham scan. `points` itself is left untouched.
///
/// The hull is listed in reverse push order of the scan: it starts at the most recently added
/// vertex and ends with the pivot (the lowest point, rightmost among equally low ones).
/// Use [`ccw_from_pivot`] to obtain the counter-clockwise traversal starting at the pivot.
///
/// Fewer than 3 points result in an empty hull.
/// Degenerate sets (all points collinear or coincident) result in fewer than 3 vertices.
pub fn compute(points: &[Point]) -> Vec<Point> {
    let mut working = points.to_vec();
    compute_in_place(&mut working)
}

/// Same as [`compute`], but reorders `points` instead of a working copy:
/// afterwards `points[0]` is the pivot, followed by all other points in polar order around it.
pub fn compute_in_place(points: &mut [Point]) -> Vec<Point> {
    if points.len() < 3 {
        debug!("[GS] {} point(s), hull is empty", points.len());
        return vec![];
    }
    debug_assert!(
        assertions::all_finite(points),
        "non-finite coordinates: {}",
        fmt_points(points)
    );

    move_pivot_to_front(points);
    sort_by_polar_angle(points);
    trace!("[GS] polar order: {}", fmt_points(points));

    let hull = scan(points);

    debug!(
        "[GS] {} points, pivot {}, {} hull vertices",
        points.len(),
        points[0],
        hull.len()
    );
    debug_assert!(assertions::hull_is_subset(&hull, points));

    hull
}

/// Index of the pivot: the point with minimum y, the one with maximum x among those.
/// On a full tie, the first occurrence.
pub fn lowest_point_index(points: &[Point]) -> Option<usize> {
    (0..points.len()).reduce(|m, i| {
        let (p, lowest) = (points[i], points[m]);
        if p.1 < lowest.1 || (p.1 == lowest.1 && p.0 > lowest.0) {
            i
        } else {
            m
        }
    })
}

/// Swaps the pivot into position 0
pub fn move_pivot_to_front(points: &mut [Point]) {
    if let Some(m) = lowest_point_index(points) {
        points.swap(0, m);
    }
}

/// Whether `a` precedes `b` in counter-clockwise polar order around `pivot`.
///
/// If `pivot`, `a` and `b` are collinear, `a` precedes `b` only if it is closer to `pivot` along
/// either axis. Points equally far from `pivot` do not precede each other.
///
/// The orientation is evaluated exactly, so that for a pivot below (or level with and right of)
/// all other points this is a strict weak order, as required by [`slice::sort_by`].
pub fn polar_less(pivot: Point, a: Point, b: Point) -> bool {
    match orientation(pivot, a, b) {
        Orientation::Collinear => {
            let dx = (a.0 - pivot.0).abs() - (b.0 - pivot.0).abs();
            let dy = (a.1 - pivot.1).abs() - (b.1 - pivot.1).abs();
            dx < 0.0 || dy < 0.0
        }
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
    }
}

/// [`Ordering`] derived from [`polar_less`]
pub fn polar_order(pivot: Point, a: Point, b: Point) -> Ordering {
    if polar_less(pivot, a, b) {
        Ordering::Less
    } else if polar_less(pivot, b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts `points[1..]` in polar order around `points[0]`
pub fn sort_by_polar_angle(points: &mut [Point]) {
    if let Some((pivot, rest)) = points.split_first_mut() {
        let pivot = *pivot;
        rest.sort_by(|a, b| polar_order(pivot, *a, *b));
    }
}

/// Reverses the listing of [`compute`] into the counter-clockwise traversal starting at the pivot
pub fn ccw_from_pivot(hull: &[Point]) -> Vec<Point> {
    hull.iter().rev().copied().collect()
}

/// Area enclosed by the hull (shoelace formula), regardless of listing direction
pub fn hull_area(hull: &[Point]) -> f64 {
    let area2: f64 = hull
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
        .sum();
    area2.abs() / 2.0
}

/// Scans points sorted in polar order (pivot first), requires at least 2 points
fn scan(sorted: &[Point]) -> Vec<Point> {
    let mut stack = PointStack::with_capacity(sorted.len());
    stack.push(sorted[0]);
    stack.push(sorted[1]);

    for &p in &sorted[2..] {
        //pop every vertex which is no longer convex with the new point
        while stack.len() >= 2 && !is_left_turn(stack.second_from_top(), stack.top(), p) {
            stack.pop();
        }
        stack.push(p);
        trace!("[GS] {stack}");
    }

    stack.drain_top_down()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn pivot_is_lowest_then_rightmost() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
        assert_eq!(lowest_point_index(&points), Some(2));

        let points = pts(&[(3.0, 1.0), (5.0, -2.0), (-1.0, -2.0)]);
        assert_eq!(lowest_point_index(&points), Some(1));

        let points = pts(&[(1.0, 1.0), (0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(lowest_point_index(&points), Some(1));

        assert_eq!(lowest_point_index(&[]), None);
    }

    #[test]
    fn polar_order_closer_first_on_a_ray() {
        let pivot = Point(0.0, 0.0);
        assert!(polar_less(pivot, Point(1.0, 0.0), Point(0.0, 1.0)));
        assert!(!polar_less(pivot, Point(0.0, 1.0), Point(1.0, 0.0)));

        assert!(polar_less(pivot, Point(1.0, 1.0), Point(2.0, 2.0)));
        assert!(!polar_less(pivot, Point(2.0, 2.0), Point(1.0, 1.0)));
        assert_eq!(
            polar_order(pivot, Point(-3.0, 0.0), Point(-1.0, 0.0)),
            Ordering::Greater
        );

        //equally far: neither precedes the other
        assert!(!polar_less(pivot, Point(1.0, 1.0), Point(1.0, 1.0)));
        assert_eq!(
            polar_order(pivot, Point(1.0, 1.0), Point(1.0, 1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn pivot_duplicates_sort_first() {
        let pivot = Point(0.0, 0.0);
        assert_eq!(polar_order(pivot, pivot, Point(-1.0, 0.0)), Ordering::Less);
        assert_eq!(polar_order(pivot, Point(2.0, 1.0), pivot), Ordering::Greater);
    }

    #[test]
    fn in_place_reorders_caller_collection() {
        let mut points = pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 4.0), (-4.0, 5.0), (20.0, 70.0)]);
        let hull = compute_in_place(&mut points);

        assert_eq!(fmt_points(&points), "[{0 0} {3 4} {1 2} {20 70} {-4 5}]");
        assert_eq!(fmt_points(&hull), "[{-4 5} {20 70} {3 4} {0 0}]");
    }

    #[test]
    fn working_copy_leaves_input_untouched() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 4.0), (-4.0, 5.0), (20.0, 70.0)]);
        let before = points.clone();
        let hull = compute(&points);
        assert_eq!(points, before);
        assert_eq!(hull, pts(&[(-4.0, 5.0), (20.0, 70.0), (3.0, 4.0), (0.0, 0.0)]));
    }

    #[test]
    fn ccw_listing_starts_at_pivot() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 4.0)]);
        let hull = compute(&points);
        assert_eq!(hull, pts(&[(1.0, 2.0), (3.0, 4.0), (0.0, 0.0)]));

        let ccw = ccw_from_pivot(&hull);
        assert_eq!(ccw, pts(&[(0.0, 0.0), (3.0, 4.0), (1.0, 2.0)]));
        assert!(
            ccw.iter()
                .circular_tuple_windows()
                .all(|(a, b, c)| is_left_turn(*a, *b, *c))
        );
    }

    #[test]
    fn collinear_pivot_ray_keeps_farthest() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (-1.0, 3.0)]);
        let hull = compute(&points);
        assert_eq!(hull, pts(&[(-1.0, 3.0), (2.0, 2.0), (0.0, 0.0)]));
    }

    #[test]
    fn all_collinear_is_abbreviated() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let hull = compute(&points);
        assert_eq!(hull, pts(&[(0.0, 0.0), (2.0, 0.0)]));

        let points = pts(&[(1.0, 1.0), (3.0, 3.0), (2.0, 2.0), (0.0, 0.0)]);
        let hull = compute(&points);
        assert_eq!(hull, pts(&[(3.0, 3.0), (0.0, 0.0)]));
    }

    #[test]
    fn coincident_points() {
        let points = pts(&[(1.0, 1.0); 4]);
        let hull = compute(&points);
        assert_eq!(hull, pts(&[(1.0, 1.0), (1.0, 1.0)]));
    }

    #[test]
    fn area_of_unit_square() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(hull_area(&square), 1.0);
        assert_eq!(hull_area(&ccw_from_pivot(&square)), 1.0);
        assert_eq!(hull_area(&[]), 0.0);
    }
}
