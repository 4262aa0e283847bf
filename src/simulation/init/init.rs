use crate::domain::catalog::SpeciesCatalog;
use crate::domain::tools::Tool;
use crate::grid::{CellKind, Grid};
use crate::systems::moisture;

use super::random;
use super::step_stats::StepStats;
use super::WorldCore;

/// Chance out of 100 for a cell to roll water during terrain generation.
const WATER_CHANCE_PERCENT: u32 = 10;

pub(super) fn create_world_core(size: u32, seed: u32) -> WorldCore {
    let mut world = WorldCore {
        catalog: SpeciesCatalog::builtin(),
        grid: Grid::new(size, size),
        selected_tool: Tool::Cursor,
        frame: 0,
        rng_state: random::normalize_seed(seed),
        step_stats: StepStats::default(),
    };
    init_terrain(&mut world);
    world
}

/// Roll fresh terrain over a cleared board, then seed the moisture field.
///
/// Bulk path: kinds are written directly and the water index rebuilt once,
/// instead of going through set_kind_idx per cell.
pub(super) fn init_terrain(world: &mut WorldCore) {
    world.grid.clear();
    for idx in 0..world.grid.size() {
        if random::roll(&mut world.rng_state, 100) < WATER_CHANCE_PERCENT {
            world.grid.kinds[idx] = CellKind::Water;
        }
    }
    world.grid.rebuild_water_index();
    moisture::recompute_field(&mut world.grid);
}
