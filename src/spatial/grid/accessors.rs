use super::*;

impl Grid {
    // === Kind access ===
    #[inline]
    pub fn kind_at(&self, idx: usize) -> CellKind {
        self.kinds[idx]
    }

    #[inline]
    pub fn is_water_idx(&self, idx: usize) -> bool {
        self.kinds[idx] == CellKind::Water
    }

    // === Moisture access ===
    #[inline]
    pub fn moisture_at(&self, idx: usize) -> f32 {
        self.moisture[idx]
    }

    // === Plant access ===
    #[inline]
    pub fn plant_at(&self, idx: usize) -> Option<&Plant> {
        self.plants[idx].as_ref()
    }

    /// Detach and return the plant of one cell, leaving the cell empty.
    #[inline]
    pub fn take_plant(&mut self, idx: usize) -> Option<Plant> {
        self.plants[idx].take()
    }

    /// Remove every plant while leaving terrain and moisture untouched.
    pub fn clear_plants(&mut self) {
        self.plants.fill(None);
    }

    // === Get raw pointers for JS interop ===
    pub fn kinds_ptr(&self) -> *const u8 {
        // CellKind is repr(u8), so the buffer is a valid u8 view.
        self.kinds.as_ptr() as *const u8
    }

    pub fn moisture_ptr(&self) -> *const f32 {
        self.moisture.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}
