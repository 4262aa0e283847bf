//! World - moisture-driven farming simulation on a small grid
//!
//! Single responsibility split:
//! - init/      - construction, terrain rolls, RNG, tool selection
//! - commands/  - tool application and board resets
//! - step/      - the tick loop
//! - stats/     - per-step counters surfaced to the host
//! - render/    - JSON extraction for the overlay and tooltip layers
//!
//! The moisture and growth passes themselves live in crate::systems; this
//! module only orchestrates them.

use crate::domain::catalog::SpeciesCatalog;
use crate::domain::tools::Tool;
use crate::grid::{CellKind, Grid};

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "stats/step_stats.rs"]
mod step_stats;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{AbiLayout, World};
pub use step_stats::StepStats;

pub(crate) struct AbiLayoutData {
    pub(crate) kinds_ptr: *const u8,
    pub(crate) kinds_len_elements: usize,
    pub(crate) kinds_len_bytes: usize,
    pub(crate) moisture_ptr: *const f32,
    pub(crate) moisture_len_elements: usize,
    pub(crate) moisture_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
}

/// The simulation world
pub struct WorldCore {
    catalog: SpeciesCatalog,
    grid: Grid,

    // Settings
    selected_tool: Tool,

    // State
    frame: u64,
    rng_state: u32,
    step_stats: StepStats,
}

impl WorldCore {
    /// Create a new square world with freshly rolled terrain
    pub fn new(size: u32, seed: u32) -> Self {
        init::create_world_core(size, seed)
    }

    /// Swap in a species catalog parsed from JSON.
    ///
    /// Existing plants reference ids of the old catalog, so they are removed,
    /// and a selected seed tool falls back to the cursor for the same reason.
    pub fn load_species_catalog_json(&mut self, json: &str) -> Result<(), String> {
        let catalog = SpeciesCatalog::from_catalog_json(json)?;
        self.catalog = catalog;
        self.grid.clear_plants();
        if matches!(self.selected_tool, Tool::Seed(_)) {
            self.selected_tool = Tool::Cursor;
        }
        Ok(())
    }

    pub fn species_manifest_json(&self) -> String {
        self.catalog.manifest_json()
    }

    pub fn species_count(&self) -> usize {
        self.catalog.species_count()
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Select the tool applied by subsequent clicks
    pub fn select_tool(&mut self, tool: Tool) {
        settings::select_tool(self, tool);
    }

    pub fn selected_tool(&self) -> Tool {
        settings::selected_tool(self)
    }

    /// Get the counters of the most recent step (zeros before the first)
    pub fn get_step_stats(&self) -> StepStats {
        settings::get_step_stats(self)
    }

    /// Apply the selected tool to a cell; true when the board changed
    pub fn apply_tool(&mut self, x: u32, y: u32) -> bool {
        commands::apply_tool(self, x, y)
    }

    /// Reset to an all-land, plant-free board
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Re-roll the terrain, discarding plants and manual edits
    pub fn randomize(&mut self) {
        commands::randomize(self)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Cell queries (safe defaults outside the grid) ===

    pub fn kind_at(&self, x: i32, y: i32) -> CellKind {
        if !self.grid.in_bounds(x, y) {
            return CellKind::Land;
        }
        self.grid.kind_at(self.grid.index(x as u32, y as u32))
    }

    pub fn moisture_at(&self, x: i32, y: i32) -> f32 {
        if !self.grid.in_bounds(x, y) {
            return 0.0;
        }
        self.grid.moisture_at(self.grid.index(x as u32, y as u32))
    }

    pub fn water_cell_count(&self) -> usize {
        self.grid.water_cell_count()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.size()
    }

    /// Occupied cells, dead plants included
    pub fn plant_count(&self) -> usize {
        self.grid.plants.iter().flatten().count()
    }

    pub fn living_plant_count(&self) -> usize {
        self.grid
            .plants
            .iter()
            .flatten()
            .filter(|plant| plant.alive)
            .count()
    }

    // === JSON views for the host ===

    /// All plants on the board, row-major
    pub fn plants_json(&self) -> String {
        render_extract::plants_json(self)
    }

    /// One cell with its plant, or `null` outside the grid
    pub fn cell_info_json(&self, x: i32, y: i32) -> String {
        render_extract::cell_info_json(self, x, y)
    }

    // === Raw views for JS rendering ===

    /// Get pointer to kinds array (for JS rendering)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.grid.kinds_ptr()
    }

    /// Get pointer to moisture array (for JS rendering)
    pub fn moisture_ptr(&self) -> *const f32 {
        self.grid.moisture_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn kinds_len_elements(&self) -> usize {
        self.grid.size()
    }

    pub fn kinds_len_bytes(&self) -> usize {
        self.grid.size()
    }

    pub fn moisture_len_elements(&self) -> usize {
        self.grid.size()
    }

    pub fn moisture_len_bytes(&self) -> usize {
        self.grid.size() * std::mem::size_of::<f32>()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.grid.size()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.grid.size() * std::mem::size_of::<u32>()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            kinds_ptr: self.kinds_ptr(),
            kinds_len_elements: self.kinds_len_elements(),
            kinds_len_bytes: self.kinds_len_bytes(),
            moisture_ptr: self.moisture_ptr(),
            moisture_len_elements: self.moisture_len_elements(),
            moisture_len_bytes: self.moisture_len_bytes(),
            colors_ptr: self.colors_ptr(),
            colors_len_elements: self.colors_len_elements(),
            colors_len_bytes: self.colors_len_bytes(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
