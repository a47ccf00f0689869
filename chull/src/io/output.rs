use convexhull::io::ext_repr::{ExtHull, ExtPoint, ExtPointSet};
use serde::{Deserialize, Serialize};

use crate::config::ChullConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HullOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ExtPointSet>,
    pub hull: ExtHull,
    /// The input collection as reordered by an in-place computation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reordered: Option<Vec<ExtPoint>>,
    pub run_time_ms: u128,
    pub config: ChullConfig,
}
