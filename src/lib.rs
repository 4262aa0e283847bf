//! Plantula Engine - moisture and growth simulation in WASM
//!
//! A tiny farming toy: land and water cells on a square grid, a moisture
//! field radiating from the water, and plants that live or die by their
//! species' tolerance band. JS owns rendering and the tick clock; all
//! simulation state and rules live here.
//!
//! Architecture:
//! - domain/     - Species, plants, tools, palette (pure data)
//! - spatial/    - SoA grid and the water index
//! - systems/    - Moisture and growth passes
//! - simulation/ - Orchestration and the wasm facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps internal paths short and stable)
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌱 Plantula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{AbiLayout, StepStats, World, WorldCore};
pub use domain::species::SpeciesId;

// Export tool and builtin species constants for JS
#[wasm_bindgen]
pub fn tool_cursor() -> u8 { domain::tools::TOOL_CURSOR }
#[wasm_bindgen]
pub fn tool_shovel() -> u8 { domain::tools::TOOL_SHOVEL }
#[wasm_bindgen]
pub fn tool_bucket() -> u8 { domain::tools::TOOL_BUCKET }
/// Seed tool id for a species of the active catalog. Ids past the wire
/// range saturate, and `select_tool` rejects them.
#[wasm_bindgen]
pub fn tool_seed(species: u8) -> u8 { domain::tools::TOOL_SEED_BASE.saturating_add(species) }

#[wasm_bindgen]
pub fn species_marsh_plant() -> u8 { domain::species::SP_MARSH_PLANT }
#[wasm_bindgen]
pub fn species_potato() -> u8 { domain::species::SP_POTATO }
#[wasm_bindgen]
pub fn species_cactus() -> u8 { domain::species::SP_CACTUS }
