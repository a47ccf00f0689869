use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::geometry::primitives::Point;

/// LIFO stack of provisional hull vertices, backed by a [`Vec`].
///
/// The top of the stack is the last element of the vector.
/// Popping or peeking beyond the depth of the stack is a bug in the caller and panics.
#[derive(Debug, Clone, Default)]
pub struct PointStack {
    points: Vec<Point>,
}

impl PointStack {
    pub fn with_capacity(capacity: usize) -> Self {
        PointStack {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Removes the top of the stack and returns it
    pub fn pop(&mut self) -> Point {
        self.points.pop().expect("pop on empty point stack")
    }

    pub fn top(&self) -> Point {
        *self.points.last().expect("no top on empty point stack")
    }

    /// The element just below the top
    pub fn second_from_top(&self) -> Point {
        assert!(
            self.points.len() >= 2,
            "point stack of depth {} has no second element",
            self.points.len()
        );
        self.points[self.points.len() - 2]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the stack, listing its points from top to bottom (last pushed first).
    pub fn drain_top_down(self) -> Vec<Point> {
        let mut points = self.points;
        points.reverse();
        points
    }
}

/// Formats the stack from top to bottom
impl Display for PointStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PointStack: {}", self.points.iter().rev().join(" "))
    }
}
