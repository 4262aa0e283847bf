//! Systems - the two per-world passes
//!
//! moisture: recompute the scalar field from the water cells
//! growth:   advance every living plant against that field

pub mod growth;
pub mod moisture;

pub use growth::GrowthTally;
