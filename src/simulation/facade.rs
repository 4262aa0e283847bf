use wasm_bindgen::prelude::*;

use crate::domain::tools::Tool;
use crate::grid::DEFAULT_GRID_SIZE;

use super::step_stats::StepStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct AbiLayout {
    kinds_ptr: u32,
    kinds_len_elements: u32,
    kinds_len_bytes: u32,
    moisture_ptr: u32,
    moisture_len_elements: u32,
    moisture_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn kinds_ptr(&self) -> u32 { self.kinds_ptr }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_elements(&self) -> u32 { self.kinds_len_elements }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_bytes(&self) -> u32 { self.kinds_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn moisture_ptr(&self) -> u32 { self.moisture_ptr }
    #[wasm_bindgen(getter)]
    pub fn moisture_len_elements(&self) -> u32 { self.moisture_len_elements }
    #[wasm_bindgen(getter)]
    pub fn moisture_len_bytes(&self) -> u32 { self.moisture_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create the default 10x10 world from a seed
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            core: WorldCore::new(DEFAULT_GRID_SIZE, seed),
        }
    }

    #[wasm_bindgen(js_name = newWithSize)]
    pub fn new_with_size(size: u32, seed: u32) -> Self {
        Self {
            core: WorldCore::new(size, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Select the tool applied by subsequent clicks.
    /// Returns false (keeping the old tool) for ids the catalog cannot back.
    pub fn select_tool(&mut self, tool: u8) -> bool {
        match Tool::from_wire(tool, self.core.species_count()) {
            Some(tool) => {
                self.core.select_tool(tool);
                true
            }
            None => false,
        }
    }

    pub fn selected_tool(&self) -> u8 {
        self.core.selected_tool().to_wire()
    }

    /// Apply the selected tool to a cell; true when the board changed
    pub fn click_cell(&mut self, x: u32, y: u32) -> bool {
        self.core.apply_tool(x, y)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Get the counters of the most recent step (zeros before the first)
    pub fn get_step_stats(&self) -> StepStats {
        self.core.get_step_stats()
    }

    /// Reset to an all-land, plant-free board
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Re-roll the terrain, discarding plants and manual edits
    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn load_species_catalog(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_species_catalog_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn species_manifest_json(&self) -> String {
        self.core.species_manifest_json()
    }

    pub fn species_count(&self) -> usize {
        self.core.species_count()
    }

    pub fn cell_count(&self) -> usize {
        self.core.cell_count()
    }

    pub fn water_cell_count(&self) -> usize {
        self.core.water_cell_count()
    }

    /// Occupied cells, dead plants included
    pub fn plant_count(&self) -> usize {
        self.core.plant_count()
    }

    pub fn living_plant_count(&self) -> usize {
        self.core.living_plant_count()
    }

    /// Terrain kind of a cell as its wire value (0 land, 1 water)
    pub fn kind_at(&self, x: i32, y: i32) -> u8 {
        self.core.kind_at(x, y).as_wire()
    }

    pub fn moisture_at(&self, x: i32, y: i32) -> f32 {
        self.core.moisture_at(x, y)
    }

    /// One cell with its plant as JSON, or `null` outside the grid
    pub fn cell_info_json(&self, x: i32, y: i32) -> String {
        self.core.cell_info_json(x, y)
    }

    /// All plants on the board as JSON, row-major
    pub fn plants_json(&self) -> String {
        self.core.plants_json()
    }

    /// Get pointer to kinds array (for JS rendering)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.core.kinds_ptr()
    }

    /// Get pointer to moisture array (for JS rendering)
    pub fn moisture_ptr(&self) -> *const f32 {
        self.core.moisture_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn kinds_len(&self) -> usize {
        self.core.kinds_len_elements()
    }

    pub fn moisture_len(&self) -> usize {
        self.core.moisture_len_elements()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len_elements()
    }

    /// Every buffer pointer and length in one call, for host-side setup
    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            kinds_ptr: data.kinds_ptr as u32,
            kinds_len_elements: data.kinds_len_elements as u32,
            kinds_len_bytes: data.kinds_len_bytes as u32,
            moisture_ptr: data.moisture_ptr as u32,
            moisture_len_elements: data.moisture_len_elements as u32,
            moisture_len_bytes: data.moisture_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl World {
    /// Create the default world seeded from the host clock
    pub fn auto() -> World {
        World::new(js_sys::Date::now() as u64 as u32)
    }
}
