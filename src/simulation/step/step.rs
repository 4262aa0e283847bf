use crate::systems::{growth, moisture};

use super::step_stats::StepStats;
use super::WorldCore;

/// One simulation tick.
///
/// Growth runs FIRST and reads the moisture field as it stood when the
/// step began; only then is the field recomputed. Plants react to the
/// world of the previous tick, and the recompute washes out any shovel
/// dryness left over from clicks in between.
pub(super) fn step(world: &mut WorldCore) {
    let tally = growth::advance_all(&mut world.grid, &world.catalog);
    let land_recomputed = moisture::recompute_field(&mut world.grid);

    let mut living_plants = 0u32;
    let mut dead_plants = 0u32;
    for plant in world.grid.plants.iter().flatten() {
        if plant.alive {
            living_plants += 1;
        } else {
            dead_plants += 1;
        }
    }

    world.step_stats = StepStats {
        plants_grown: tally.grown,
        plants_matured: tally.matured,
        plants_died: tally.died,
        land_recomputed,
        living_plants,
        dead_plants,
        water_cells: world.grid.water_cell_count() as u32,
    };

    world.frame += 1;
}
