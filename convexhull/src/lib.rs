//! Convex hulls of finite 2D point sets, computed with the Graham scan.
//!
//! The entry point is [`compute`](geometry::convex_hull::compute), which takes a collection of
//! [`Point`](geometry::primitives::Point)s and returns the vertices of their convex hull.

/// Geometric primitives, orientation predicates and the Graham scan itself
pub mod geometry;

/// Importing point sets into and exporting hulls out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use geometry::convex_hull::{ccw_from_pivot, compute, compute_in_place};
#[doc(inline)]
pub use geometry::primitives::Point;
