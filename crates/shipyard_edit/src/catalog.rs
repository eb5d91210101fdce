//! Read-only part catalog
//!
//! Loaded once from a TOML listing of `[[part]]` tables:
//!
//! ```toml
//! [[part]]
//! name = "Cabin A"
//! part_type = "Cabin"
//! mass = 2.5
//! price = 120
//! footprint = { mask = ["...", ".#.", "..."] }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::{EditorError, PartDefinition, PartType, Result};

#[derive(Deserialize)]
struct CatalogListing {
    #[serde(default)]
    part: Vec<PartDefinition>,
}

/// Name-indexed set of part definitions. Never mutated after loading.
#[derive(Debug, Default)]
pub struct Catalog {
    definitions: Vec<Arc<PartDefinition>>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from definitions.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate name or on a footprint without enabled segments;
    /// such a part could never be found on the grid again once placed.
    pub fn new(definitions: impl IntoIterator<Item = PartDefinition>) -> Result<Self> {
        let mut catalog = Catalog::default();
        for definition in definitions {
            if catalog.by_name.contains_key(&definition.name) {
                log::warn!("Duplicate catalog entry '{}'", definition.name);
                return Err(EditorError::DuplicatePart { name: definition.name });
            }
            if definition.footprint.enabled_count() == 0 {
                return Err(EditorError::InvalidFootprint { name: definition.name });
            }
            catalog.by_name.insert(definition.name.clone(), catalog.definitions.len());
            catalog.definitions.push(Arc::new(definition));
        }
        Ok(catalog)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let listing: CatalogListing = toml::from_str(text)?;
        Self::new(listing.part)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EditorError::read_file(path, e.to_string()))?;
        Self::from_toml(&text)
    }

    /// Look up a definition. A miss is logged and yields `None`.
    pub fn get(&self, name: &str) -> Option<Arc<PartDefinition>> {
        match self.by_name.get(name) {
            Some(&idx) => Some(self.definitions[idx].clone()),
            None => {
                log::warn!("Part '{name}' not found in catalog");
                None
            }
        }
    }

    /// Like [`Catalog::get`], but a miss is an error
    pub fn require(&self, name: &str) -> Result<Arc<PartDefinition>> {
        self.by_name
            .get(name)
            .map(|&idx| self.definitions[idx].clone())
            .ok_or_else(|| EditorError::UnknownPart { name: name.to_string() })
    }

    /// All definitions of one type, in listing order
    pub fn all_of_type(&self, part_type: PartType) -> Vec<Arc<PartDefinition>> {
        self.definitions.iter().filter(|d| d.part_type == part_type).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
