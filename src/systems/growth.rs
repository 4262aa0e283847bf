//! Growth pass - one tick for every plant on the grid
//!
//! Reads the moisture field as it stood at the end of the previous step;
//! the step loop recomputes moisture after this pass, not before it.

use crate::domain::catalog::SpeciesCatalog;
use crate::domain::plant::GrowthOutcome;
use crate::grid::Grid;

/// Counts of what one growth pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthTally {
    pub grown: u32,
    pub matured: u32,
    pub died: u32,
}

/// Advance every plant by one tick. Row-major order, though no plant can
/// observe another so the order is not load-bearing.
pub fn advance_all(grid: &mut Grid, catalog: &SpeciesCatalog) -> GrowthTally {
    let mut tally = GrowthTally::default();
    for idx in 0..grid.size() {
        let moisture = grid.moisture[idx];
        let Some(plant) = grid.plants[idx].as_mut() else {
            continue;
        };
        let Some(props) = catalog.props(plant.species) else {
            continue;
        };
        match plant.advance_growth(props, moisture) {
            GrowthOutcome::Grew => {
                tally.grown += 1;
                if plant.is_mature() {
                    tally.matured += 1;
                }
            }
            GrowthOutcome::Died => tally.died += 1,
            GrowthOutcome::Mature | GrowthOutcome::Dormant => {}
        }
    }
    tally
}
