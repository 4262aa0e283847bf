//! Domain data - species definitions, plants, tools, palette
//!
//! Everything here is plain data and pure functions. Nothing in this module
//! touches the grid or the wasm boundary.

pub mod catalog;
pub mod palette;
pub mod plant;
pub mod species;
pub mod tools;

pub use catalog::SpeciesCatalog;
pub use plant::{GrowthOutcome, Plant, SizeCategory};
pub use species::{SpeciesId, SpeciesProps};
pub use tools::Tool;
