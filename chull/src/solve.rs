use anyhow::Result;
use convexhull::io::ext_repr::ExtPointSet;
use convexhull::io::{export, import};
use convexhull::{compute, compute_in_place};
use log::info;

use crate::EPOCH;
use crate::config::ChullConfig;
use crate::io::output::HullOutput;

/// Imports the point set, computes its hull and composes the solution
pub fn solve(ext_points: ExtPointSet, config: ChullConfig) -> Result<HullOutput> {
    let mut points = import::import(&ext_points)?;
    let start = EPOCH.elapsed();

    let (hull, reordered) = match config.in_place {
        true => {
            let hull = compute_in_place(&mut points);
            let reordered = points.iter().map(|&p| p.into()).collect();
            (hull, Some(reordered))
        }
        false => (compute(&points), None),
    };

    let run_time = EPOCH.elapsed() - start;
    info!(
        "[MAIN] hull of {} points has {} vertices ({} ms)",
        points.len(),
        hull.len(),
        run_time.as_millis()
    );

    Ok(HullOutput {
        input: config.include_input.then_some(ext_points),
        hull: export::export(&hull, config.output_order),
        reordered,
        run_time_ms: run_time.as_millis(),
        config,
    })
}
