use wasm_bindgen::prelude::*;

/// Snapshot of what the last step did.
///
/// The first four counters are per-step deltas; the last three are gauges
/// of the whole board taken right after the step finished.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct StepStats {
    pub(super) plants_grown: u32,
    pub(super) plants_matured: u32,
    pub(super) plants_died: u32,
    pub(super) land_recomputed: u32,
    pub(super) living_plants: u32,
    pub(super) dead_plants: u32,
    pub(super) water_cells: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn plants_grown(&self) -> u32 { self.plants_grown }
    #[wasm_bindgen(getter)]
    pub fn plants_matured(&self) -> u32 { self.plants_matured }
    #[wasm_bindgen(getter)]
    pub fn plants_died(&self) -> u32 { self.plants_died }
    #[wasm_bindgen(getter)]
    pub fn land_recomputed(&self) -> u32 { self.land_recomputed }
    #[wasm_bindgen(getter)]
    pub fn living_plants(&self) -> u32 { self.living_plants }
    #[wasm_bindgen(getter)]
    pub fn dead_plants(&self) -> u32 { self.dead_plants }
    #[wasm_bindgen(getter)]
    pub fn water_cells(&self) -> u32 { self.water_cells }
}
