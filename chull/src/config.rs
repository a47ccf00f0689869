use convexhull::io::ext_repr::HullOrder;
use serde::{Deserialize, Serialize};

/// Configuration of the hull runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ChullConfig {
    /// Listing order of the hull vertices in the solution file
    pub output_order: HullOrder,
    /// Reorder the input collection in place instead of computing on a copy.
    /// The reordered collection (pivot first, then polar order) is added to the solution.
    pub in_place: bool,
    /// Echo the input points in the solution file
    pub include_input: bool,
}

impl Default for ChullConfig {
    fn default() -> Self {
        Self {
            output_order: HullOrder::Stack,
            in_place: false,
            include_input: true,
        }
    }
}
