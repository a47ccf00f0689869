use anyhow::{Result, bail};
use itertools::Itertools;
use log::{debug, warn};

use crate::geometry::primitives::Point;
use crate::io::ext_repr::ExtPointSet;

/// Converts an [`ExtPointSet`] into [`Point`]s.
///
/// Fails on non-finite coordinates. Duplicate points are kept.
pub fn import(ext_points: &ExtPointSet) -> Result<Vec<Point>> {
    let points = ext_points
        .points
        .iter()
        .map(|&p| Point::from(p))
        .collect_vec();

    if let Some((i, p)) = points.iter().find_position(|p| !p.is_finite()) {
        bail!("point {i} has non-finite coordinates: {p}");
    }

    let n_unique = points.iter().unique().count();
    if n_unique < points.len() {
        warn!(
            "[IO] {} duplicate point(s) in input, they are not removed",
            points.len() - n_unique
        );
    }
    if points.len() < 3 {
        warn!(
            "[IO] only {} point(s) in input, the hull will be empty",
            points.len()
        );
    }
    debug!("[IO] imported {} points", points.len());

    Ok(points)
}
