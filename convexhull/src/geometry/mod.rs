/// Graham scan: pivot selection, polar sort and the stack-based scan
pub mod convex_hull;

/// Orientation predicates on triples of points
pub mod orientation;

/// Stack of provisional hull vertices used during the scan
pub mod point_stack;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

#[doc(inline)]
pub use point_stack::PointStack;
