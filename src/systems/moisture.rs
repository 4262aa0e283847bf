//! Moisture field - distance falloff from water cells
//!
//! Every land cell takes the maximum contribution over all water cells,
//! max(0, 1 - d / RADIUS) with d the Euclidean center distance. Maximum,
//! not sum: two nearby ponds do not stack above the closer one alone.
//!
//! The field is recomputed in full, O(land x water). Grids stay small
//! (tens of cells per side) so the quadratic pass is not worth indexing
//! around, and full recomputation keeps drain correct for free: a removed
//! water cell simply stops contributing.

use crate::domain::palette::WATER_COLOR;
use crate::grid::{CellKind, Grid};

/// Distance at which a water cell's contribution reaches zero.
pub const MOISTURE_RADIUS: f32 = 5.0;

/// Linear falloff of a single water cell's contribution.
#[inline]
pub fn falloff(distance: f32) -> f32 {
    (1.0 - distance / MOISTURE_RADIUS).max(0.0)
}

/// Moisture a cell at (x, y) would receive from the grid's water cells.
pub fn moisture_from_water(grid: &Grid, x: u32, y: u32) -> f32 {
    let mut best = 0.0f32;
    for &widx in grid.water_cells() {
        let (wx, wy) = grid.coords(widx);
        let dx = wx as f32 - x as f32;
        let dy = wy as f32 - y as f32;
        let contribution = falloff((dx * dx + dy * dy).sqrt());
        if contribution > best {
            best = contribution;
        }
    }
    best
}

/// Recompute the whole field and repaint every cell.
/// Water cells are pinned at 1.0; returns the number of land cells computed.
pub fn recompute_field(grid: &mut Grid) -> u32 {
    let mut land_recomputed = 0u32;
    for idx in 0..grid.size() {
        match grid.kind_at(idx) {
            CellKind::Water => {
                grid.moisture[idx] = 1.0;
                grid.colors[idx] = WATER_COLOR;
            }
            CellKind::Land => {
                let (x, y) = grid.coords(idx);
                let value = moisture_from_water(grid, x, y);
                grid.moisture[idx] = value;
                grid.refresh_color(idx);
                land_recomputed += 1;
            }
        }
    }
    land_recomputed
}
