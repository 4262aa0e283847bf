//! Grid - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Cell> with kind + moisture + plant per element
//! We have:    kinds[], moisture[], colors[], plants[]  // linear, blit-friendly
//!
//! The kinds/moisture/colors arrays are exposed to JS as raw wasm memory
//! views, so their element types are fixed (u8 / f32 / u32) and their length
//! never changes after construction. plants[] stays on the Rust side and is
//! serialized on demand.

use crate::domain::palette::{land_color, DRY_LAND_COLOR, WATER_COLOR};
use crate::domain::plant::Plant;

/// Default world edge used by the plain constructor.
pub const DEFAULT_GRID_SIZE: u32 = 10;

mod accessors;
mod indexing;
mod water_index;

/// Terrain kind of a single cell. The wire value is the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellKind {
    Land = 0,
    Water = 1,
}

impl CellKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Land => "land",
            CellKind::Water => "water",
        }
    }

    #[inline]
    pub fn as_wire(self) -> u8 {
        self as u8
    }
}

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    // Structure of Arrays - each property in its own contiguous array
    pub kinds: Vec<CellKind>,
    pub moisture: Vec<f32>,
    pub colors: Vec<u32>, // ABGR packed color
    pub plants: Vec<Option<Plant>>,

    // Indices of every water cell, kept in sync by set_kind_idx.
    // Lets the moisture pass iterate water directly instead of scanning.
    water: Vec<usize>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            size,
            kinds: vec![CellKind::Land; size],
            moisture: vec![0.0; size],
            colors: vec![DRY_LAND_COLOR; size],
            plants: vec![None; size],
            water: Vec::new(),
        }
    }

    /// Reset every cell to dry, plant-free land.
    pub fn clear(&mut self) {
        self.kinds.fill(CellKind::Land);
        self.moisture.fill(0.0);
        self.colors.fill(DRY_LAND_COLOR);
        self.plants.fill(None);
        self.water.clear();
    }

    /// Change the terrain kind of one cell, keeping the water index, the
    /// plant slot and the color in sync. A no-op when the kind is unchanged.
    ///
    /// Water cells pin moisture at 1.0 immediately; land cells keep their
    /// stale moisture until the caller recomputes the field.
    pub fn set_kind_idx(&mut self, idx: usize, kind: CellKind) {
        if self.kinds[idx] == kind {
            return;
        }
        self.kinds[idx] = kind;
        self.plants[idx] = None;
        match kind {
            CellKind::Water => {
                self.moisture[idx] = 1.0;
                self.colors[idx] = WATER_COLOR;
                self.water_add(idx);
            }
            CellKind::Land => {
                self.water_remove(idx);
                self.refresh_color(idx);
            }
        }
    }

    /// Repaint one land cell from its current moisture.
    #[inline]
    pub fn refresh_color(&mut self, idx: usize) {
        self.colors[idx] = land_color(self.moisture[idx]);
    }
}
