use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::species::{builtin_species, SpeciesId, SpeciesProps, MAX_SPECIES};
use crate::domain::tools::TOOL_SEED_BASE;

/// The active species table. Either the builtin three-species catalog or a
/// replacement loaded from JSON by the host.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    species: Vec<SpeciesProps>,
    key_to_id: HashMap<String, SpeciesId>,
}

impl SpeciesCatalog {
    /// Marsh Plant / Potato / Cactus, ids matching the `SP_*` constants.
    /// Built directly; the table is in id order with unique keys.
    pub fn builtin() -> Self {
        let species = builtin_species();
        let key_to_id = species
            .iter()
            .enumerate()
            .map(|(idx, props)| (props.key.clone(), idx as SpeciesId))
            .collect();
        Self { species, key_to_id }
    }

    /// Load a replacement catalog from camelCase JSON:
    /// `{"species":[{"key":"potato","name":"Potato","glyph":"🥔",
    ///   "minMoisture":0.3,"maxMoisture":0.8}, ...]}`
    /// Species ids are assigned by array position.
    pub fn from_catalog_json(json: &str) -> Result<Self, String> {
        let root: CatalogRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let species = root
            .species
            .into_iter()
            .map(|entry| {
                let name = if entry.name.is_empty() {
                    entry.key.clone()
                } else {
                    entry.name
                };
                SpeciesProps {
                    key: entry.key,
                    name,
                    glyph: entry.glyph,
                    min_moisture: entry.min_moisture,
                    max_moisture: entry.max_moisture,
                }
            })
            .collect();
        Self::from_species(species)
    }

    fn from_species(species: Vec<SpeciesProps>) -> Result<Self, String> {
        if species.is_empty() {
            return Err("catalog has no species".to_string());
        }
        if species.len() > MAX_SPECIES {
            return Err(format!(
                "too many species for seed tools: {} (max {})",
                species.len(),
                MAX_SPECIES
            ));
        }

        let mut key_to_id = HashMap::new();
        for (idx, props) in species.iter().enumerate() {
            if props.key.is_empty() {
                return Err(format!("species {} has an empty key", idx));
            }
            // NaN fails every range check below, so it is rejected too.
            let band_ok = (0.0..=1.0).contains(&props.min_moisture)
                && (0.0..=1.0).contains(&props.max_moisture)
                && props.min_moisture <= props.max_moisture;
            if !band_ok {
                return Err(format!(
                    "species {} ({}) has an invalid tolerance band: [{}, {}]",
                    idx, props.key, props.min_moisture, props.max_moisture
                ));
            }
            if key_to_id
                .insert(props.key.clone(), idx as SpeciesId)
                .is_some()
            {
                return Err(format!("duplicate species key: {}", props.key));
            }
        }

        Ok(Self { species, key_to_id })
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn is_valid_species_id(&self, id: SpeciesId) -> bool {
        (id as usize) < self.species.len()
    }

    pub fn props(&self, id: SpeciesId) -> Option<&SpeciesProps> {
        self.species.get(id as usize)
    }

    pub fn id_by_key(&self, key: &str) -> Option<SpeciesId> {
        self.key_to_id.get(key).copied()
    }

    /// camelCase JSON manifest the host toolbar builds its seed buttons
    /// from. `toolId` is the wire byte that selects the matching seed tool.
    pub fn manifest_json(&self) -> String {
        let entries: Vec<ManifestSpecies> = self
            .species
            .iter()
            .enumerate()
            .map(|(idx, props)| ManifestSpecies {
                id: idx as SpeciesId,
                key: &props.key,
                name: &props.name,
                glyph: &props.glyph,
                min_moisture: props.min_moisture,
                max_moisture: props.max_moisture,
                tool_id: TOOL_SEED_BASE + idx as u8,
            })
            .collect();
        let manifest = Manifest {
            format_version: 1,
            species: entries,
        };
        serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    format_version: u32,
    species: Vec<ManifestSpecies<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestSpecies<'a> {
    id: SpeciesId,
    key: &'a str,
    name: &'a str,
    glyph: &'a str,
    min_moisture: f32,
    max_moisture: f32,
    tool_id: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRoot {
    species: Vec<CatalogSpecies>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSpecies {
    key: String,
    #[serde(default)]
    name: String,
    glyph: String,
    min_moisture: f32,
    max_moisture: f32,
}
