//! Species definitions - the builtin plant catalog
//!
//! Species are data, not types: one `Plant` record carries a `SpeciesId`
//! that indexes the active catalog. Tolerance bands and glyphs live in
//! `SpeciesProps`, so adding a species never touches growth logic.

/// Index into the active species catalog
pub type SpeciesId = u8;

// Builtin catalog ids (stable as long as the builtin catalog is active)
pub const SP_MARSH_PLANT: SpeciesId = 0;
pub const SP_POTATO: SpeciesId = 1;
pub const SP_CACTUS: SpeciesId = 2;

/// Hard cap on catalog size. Seed tool ids are `TOOL_SEED_BASE + species`,
/// so the catalog must stay well inside the u8 tool byte.
pub const MAX_SPECIES: usize = 32;

/// Per-species record: identity, glyph, and the moisture band the species
/// survives in (closed interval).
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProps {
    /// Stable slug the host uses for CSS classes ("marsh-plant")
    pub key: String,
    /// Display name ("Marsh Plant")
    pub name: String,
    /// Emoji the overlay renders
    pub glyph: String,
    pub min_moisture: f32,
    pub max_moisture: f32,
}

impl SpeciesProps {
    /// Closed-interval tolerance check; both band edges are survivable.
    #[inline]
    pub fn tolerates(&self, moisture: f32) -> bool {
        moisture >= self.min_moisture && moisture <= self.max_moisture
    }
}

/// The three builtin species, in `SP_*` id order.
pub(crate) fn builtin_species() -> Vec<SpeciesProps> {
    vec![
        SpeciesProps {
            key: "marsh-plant".to_string(),
            name: "Marsh Plant".to_string(),
            glyph: "🌿".to_string(),
            min_moisture: 0.7,
            max_moisture: 1.0,
        },
        SpeciesProps {
            key: "potato".to_string(),
            name: "Potato".to_string(),
            glyph: "🥔".to_string(),
            min_moisture: 0.3,
            max_moisture: 0.8,
        },
        SpeciesProps {
            key: "cactus".to_string(),
            name: "Cactus".to_string(),
            glyph: "🌵".to_string(),
            min_moisture: 0.0,
            max_moisture: 0.4,
        },
    ]
}
