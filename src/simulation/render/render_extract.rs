//! JSON views for the host's overlay and tooltip layers.
//!
//! The color buffer goes to JS as raw memory; plants and per-cell detail go
//! as JSON because they are small, irregular and read rarely.

use serde::Serialize;

use crate::domain::plant::Plant;

use super::WorldCore;

/// One plant as the overlay layer wants it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlantView<'a> {
    x: u32,
    y: u32,
    species: u8,
    key: &'a str,
    name: &'a str,
    glyph: &'a str,
    growth_pct: u32,
    size: &'a str,
    alive: bool,
}

/// Plant block of a tooltip payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlantDetail<'a> {
    species: u8,
    key: &'a str,
    name: &'a str,
    glyph: &'a str,
    growth_pct: u32,
    size: &'a str,
    alive: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CellView<'a> {
    x: u32,
    y: u32,
    kind: &'a str,
    moisture: f32,
    /// Same value rounded for direct display in the tooltip.
    moisture_pct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    plant: Option<PlantDetail<'a>>,
}

#[inline]
fn growth_pct(plant: &Plant) -> u32 {
    (plant.growth_stage * 100.0).round() as u32
}

/// Every plant on the board, row-major.
/// Plants whose species the catalog no longer knows are silently skipped.
pub(super) fn plants_json(world: &WorldCore) -> String {
    let mut views = Vec::new();
    for idx in 0..world.grid.size() {
        let Some(plant) = world.grid.plant_at(idx) else {
            continue;
        };
        let Some(props) = world.catalog.props(plant.species) else {
            continue;
        };
        let (x, y) = world.grid.coords(idx);
        views.push(PlantView {
            x,
            y,
            species: plant.species,
            key: &props.key,
            name: &props.name,
            glyph: &props.glyph,
            growth_pct: growth_pct(plant),
            size: plant.size_category().as_str(),
            alive: plant.alive,
        });
    }
    serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
}

/// One cell with its plant, or `null` for coordinates outside the grid.
pub(super) fn cell_info_json(world: &WorldCore, x: i32, y: i32) -> String {
    if !world.grid.in_bounds(x, y) {
        return "null".to_string();
    }
    let idx = world.grid.index(x as u32, y as u32);

    let plant = world.grid.plant_at(idx).and_then(|plant| {
        let props = world.catalog.props(plant.species)?;
        Some(PlantDetail {
            species: plant.species,
            key: &props.key,
            name: &props.name,
            glyph: &props.glyph,
            growth_pct: growth_pct(plant),
            size: plant.size_category().as_str(),
            alive: plant.alive,
        })
    });

    let moisture = world.grid.moisture_at(idx);
    let view = CellView {
        x: x as u32,
        y: y as u32,
        kind: world.grid.kind_at(idx).as_str(),
        moisture,
        moisture_pct: (moisture * 100.0).round() as u32,
        plant,
    };
    serde_json::to_string(&view).unwrap_or_else(|_| "null".to_string())
}
