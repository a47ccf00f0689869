mod point;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use point::fmt_points;
