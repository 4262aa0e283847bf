use super::*;

impl Grid {
    // === Water index maintenance ===
    // The index holds each water cell exactly once, in no particular order.

    pub(super) fn water_add(&mut self, idx: usize) {
        debug_assert!(
            !self.water.contains(&idx),
            "water_add: cell {} already indexed",
            idx
        );
        self.water.push(idx);
    }

    pub(super) fn water_remove(&mut self, idx: usize) {
        let pos = self.water.iter().position(|&w| w == idx);
        debug_assert!(pos.is_some(), "water_remove: cell {} not indexed", idx);
        if let Some(pos) = pos {
            self.water.swap_remove(pos);
        }
    }

    /// Rebuild the index from the kinds array after a bulk terrain write.
    pub fn rebuild_water_index(&mut self) {
        self.water.clear();
        for idx in 0..self.size {
            if self.kinds[idx] == CellKind::Water {
                self.water.push(idx);
            }
        }
    }

    #[inline]
    pub fn water_cells(&self) -> &[usize] {
        &self.water
    }

    #[inline]
    pub fn water_cell_count(&self) -> usize {
        self.water.len()
    }
}
