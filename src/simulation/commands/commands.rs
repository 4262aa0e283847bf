use crate::domain::plant::Plant;
use crate::domain::species::SpeciesId;
use crate::domain::tools::Tool;
use crate::grid::CellKind;
use crate::systems::moisture;

use super::WorldCore;

/// Moisture scraped off bare land by one shovel strike.
pub(super) const SHOVEL_DRY_DELTA: f32 = 0.1;

/// Apply the selected tool to one cell. Returns true when the board changed.
pub(super) fn apply_tool(world: &mut WorldCore, x: u32, y: u32) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }
    let idx = world.grid.index(x, y);

    match world.selected_tool {
        Tool::Cursor => false,
        Tool::Shovel => use_shovel(world, idx),
        Tool::Bucket => use_bucket(world, idx),
        Tool::Seed(species) => plant_seed(world, idx, species),
    }
}

/// Digging removes the plant if there is one (dead or alive); on bare land
/// it scrapes off a little moisture instead. Water cannot be dug.
///
/// The dryness is an overlay on the computed field and lasts only until the
/// next full recompute; a tick or a bucket stroke washes it out.
fn use_shovel(world: &mut WorldCore, idx: usize) -> bool {
    if world.grid.is_water_idx(idx) {
        return false;
    }

    if world.grid.take_plant(idx).is_some() {
        return true;
    }

    let before = world.grid.moisture[idx];
    let after = (before - SHOVEL_DRY_DELTA).max(0.0);
    if after == before {
        return false;
    }
    world.grid.moisture[idx] = after;
    world.grid.refresh_color(idx);
    true
}

/// Seeds need a plant-free land cell and a species the catalog knows.
fn plant_seed(world: &mut WorldCore, idx: usize, species: SpeciesId) -> bool {
    if !world.catalog.is_valid_species_id(species) {
        return false;
    }
    if world.grid.is_water_idx(idx) || world.grid.plant_at(idx).is_some() {
        return false;
    }

    world.grid.plants[idx] = Some(Plant::new(species));
    true
}

/// The bucket toggles land <-> water and recomputes the field right away,
/// so the host sees the new moisture without waiting for the next tick.
fn use_bucket(world: &mut WorldCore, idx: usize) -> bool {
    let next = match world.grid.kind_at(idx) {
        CellKind::Land => CellKind::Water,
        CellKind::Water => CellKind::Land,
    };
    world.grid.set_kind_idx(idx, next);
    moisture::recompute_field(&mut world.grid);
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
    world.step_stats.reset();
}

pub(super) fn randomize(world: &mut WorldCore) {
    super::init::init_terrain(world);
    world.frame = 0;
    world.step_stats.reset();
}
