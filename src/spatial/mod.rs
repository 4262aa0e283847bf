//! Spatial storage - the cell grid and its water index

pub mod grid;
