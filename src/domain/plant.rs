//! Plant record and its growth state machine
//!
//! Growing (stage < 1) → Mature (stage = 1) while every tick lands inside
//! the species tolerance band; the first out-of-band tick kills the plant
//! outright. Dead is terminal; the record stays attached to its cell,
//! `alive = false`, until it is dug out or the cell floods.

use crate::domain::species::{SpeciesId, SpeciesProps};

/// Growth gained per in-band tick. Twenty good ticks reach maturity.
pub const GROWTH_INCREMENT: f32 = 0.05;

/// One planted organism, owned exclusively by its cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub species: SpeciesId,
    /// Normalized progress toward full maturity, [0, 1]
    pub growth_stage: f32,
    pub alive: bool,
}

/// What a single growth tick did to a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// Dead before the tick; nothing happened
    Dormant,
    /// In-band tick; stage advanced (possibly reaching the cap)
    Grew,
    /// Already at the cap and still in band; no further effect
    Mature,
    /// First out-of-band tick; the plant just died
    Died,
}

/// Overlay sizing bucket derived from the growth stage. Presentation only;
/// simulation logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    /// CSS class fragment the host attaches to the overlay node.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }
}

impl Plant {
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            growth_stage: 0.0,
            alive: true,
        }
    }

    /// Advance one tick against the moisture of the owning cell.
    ///
    /// Death is instantaneous on the first out-of-band tick, not gradual,
    /// and irreversible: once dead this is a no-op forever.
    pub fn advance_growth(&mut self, props: &SpeciesProps, cell_moisture: f32) -> GrowthOutcome {
        if !self.alive {
            return GrowthOutcome::Dormant;
        }

        if !props.tolerates(cell_moisture) {
            self.alive = false;
            return GrowthOutcome::Died;
        }

        if self.growth_stage >= 1.0 {
            return GrowthOutcome::Mature;
        }
        self.growth_stage = (self.growth_stage + GROWTH_INCREMENT).min(1.0);
        GrowthOutcome::Grew
    }

    #[inline]
    pub fn is_mature(&self) -> bool {
        self.growth_stage >= 1.0
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.growth_stage < 0.33 {
            SizeCategory::Small
        } else if self.growth_stage < 0.66 {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::species::builtin_species;
    use crate::domain::species::SP_POTATO;

    fn potato_props() -> SpeciesProps {
        builtin_species()[SP_POTATO as usize].clone()
    }

    #[test]
    fn grows_by_fixed_increment_inside_the_band() {
        let props = potato_props();
        let mut plant = Plant::new(SP_POTATO);
        assert_eq!(plant.advance_growth(&props, 0.4), GrowthOutcome::Grew);
        assert!((plant.growth_stage - 0.05).abs() < 1e-6);
        assert!(plant.alive);
    }

    #[test]
    fn caps_at_full_growth_and_stays_there() {
        let props = potato_props();
        let mut plant = Plant::new(SP_POTATO);
        for _ in 0..25 {
            plant.advance_growth(&props, 0.5);
        }
        assert_eq!(plant.growth_stage, 1.0);
        assert!(plant.is_mature());
        assert_eq!(plant.advance_growth(&props, 0.5), GrowthOutcome::Mature);
        assert_eq!(plant.growth_stage, 1.0);
    }

    #[test]
    fn first_out_of_band_tick_kills_and_freezes_the_stage() {
        let props = potato_props();
        let mut plant = Plant::new(SP_POTATO);
        plant.advance_growth(&props, 0.4);
        let frozen = plant.growth_stage;

        assert_eq!(plant.advance_growth(&props, 0.9), GrowthOutcome::Died);
        assert!(!plant.alive);
        assert_eq!(plant.growth_stage, frozen);

        // Dead is terminal, even if moisture comes back into band.
        assert_eq!(plant.advance_growth(&props, 0.4), GrowthOutcome::Dormant);
        assert!(!plant.alive);
        assert_eq!(plant.growth_stage, frozen);
    }

    #[test]
    fn mature_plants_still_die_out_of_band() {
        let props = potato_props();
        let mut plant = Plant::new(SP_POTATO);
        for _ in 0..20 {
            assert_eq!(plant.advance_growth(&props, 0.5), GrowthOutcome::Grew);
        }
        assert!(plant.is_mature());

        // Full growth is no shield: the tolerance check comes before the
        // maturity short-circuit.
        assert_eq!(plant.advance_growth(&props, 0.9), GrowthOutcome::Died);
        assert!(!plant.alive);
        assert_eq!(plant.growth_stage, 1.0);
    }

    #[test]
    fn growth_is_monotonic_until_death() {
        let props = potato_props();
        let mut plant = Plant::new(SP_POTATO);
        let mut last = 0.0f32;
        for _ in 0..30 {
            plant.advance_growth(&props, 0.6);
            assert!(plant.growth_stage >= last);
            last = plant.growth_stage;
        }
    }

    #[test]
    fn size_category_thresholds() {
        let mut plant = Plant::new(SP_POTATO);
        assert_eq!(plant.size_category(), SizeCategory::Small);
        plant.growth_stage = 0.32;
        assert_eq!(plant.size_category(), SizeCategory::Small);
        plant.growth_stage = 0.33;
        assert_eq!(plant.size_category(), SizeCategory::Medium);
        plant.growth_stage = 0.65;
        assert_eq!(plant.size_category(), SizeCategory::Medium);
        plant.growth_stage = 0.66;
        assert_eq!(plant.size_category(), SizeCategory::Large);
        plant.growth_stage = 1.0;
        assert_eq!(plant.size_category(), SizeCategory::Large);
    }
}
