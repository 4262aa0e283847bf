//! Tool selection and its wire encoding
//!
//! Hosts pick tools by small integer: fixed ids for cursor, shovel and
//! bucket, then one id per catalog species starting at [`TOOL_SEED_BASE`].
//! Seed ids therefore shift when a different catalog is loaded, which is
//! why validation takes the current species count.

use crate::domain::species::SpeciesId;

pub const TOOL_CURSOR: u8 = 0;
pub const TOOL_SHOVEL: u8 = 1;
pub const TOOL_BUCKET: u8 = 2;
/// First seed tool id; seed for species `k` is `TOOL_SEED_BASE + k`.
pub const TOOL_SEED_BASE: u8 = 3;

/// Currently selected interaction tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Cursor,
    Shovel,
    Bucket,
    Seed(SpeciesId),
}

impl Tool {
    /// Decode a wire id, rejecting seed ids past the loaded catalog.
    pub fn from_wire(raw: u8, species_count: usize) -> Option<Tool> {
        match raw {
            TOOL_CURSOR => Some(Tool::Cursor),
            TOOL_SHOVEL => Some(Tool::Shovel),
            TOOL_BUCKET => Some(Tool::Bucket),
            _ => {
                let species = (raw - TOOL_SEED_BASE) as usize;
                if species < species_count {
                    Some(Tool::Seed(species as SpeciesId))
                } else {
                    None
                }
            }
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Tool::Cursor => TOOL_CURSOR,
            Tool::Shovel => TOOL_SHOVEL,
            Tool::Bucket => TOOL_BUCKET,
            Tool::Seed(species) => TOOL_SEED_BASE + species,
        }
    }
}
