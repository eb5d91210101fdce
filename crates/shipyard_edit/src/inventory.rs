//! Inventory ledger
//!
//! Counted stock of part definitions, grouped per part type and sorted by
//! name. Counts never go below zero and an entry that reaches zero is removed
//! from its list.
//!
//! Persisted layout is one TOML table per part type:
//!
//! ```toml
//! [Cabin]
//! parts = [{ name = "Cabin A", count = 2 }]
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Catalog, EditorError, PartDefinition, PartIdAllocator, PartInstance, PartType, Result};

/// One stocked definition
#[derive(Clone, Debug)]
pub struct InventoryEntry {
    pub definition: Arc<PartDefinition>,
    pub count: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct CategoryRecord {
    #[serde(default)]
    parts: Vec<CountRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct CountRecord {
    name: String,
    count: u32,
}

#[derive(Debug, Default)]
pub struct Inventory {
    categories: BTreeMap<PartType, Vec<InventoryEntry>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted layout, resolving names through the catalog.
    ///
    /// Unknown names are logged and skipped. A part listed under the wrong
    /// category is filed under its real type.
    pub fn load(text: &str, catalog: &Catalog) -> Result<Self> {
        let records: BTreeMap<String, CategoryRecord> = toml::from_str(text)?;
        let mut inventory = Inventory::new();
        for (category, record) in records {
            let listed_type = category.parse::<PartType>().ok();
            if listed_type.is_none() {
                log::warn!("Unknown inventory category '{category}'");
            }
            for row in record.parts {
                let Some(definition) = catalog.get(&row.name) else {
                    log::warn!("Skipping unknown inventory part '{}'", row.name);
                    continue;
                };
                if listed_type.is_some_and(|t| t != definition.part_type) {
                    log::warn!("Inventory lists '{}' under {category} but it is a {}", row.name, definition.part_type);
                }
                inventory.add_count(definition, row.count)?;
            }
        }
        Ok(inventory)
    }

    pub fn to_toml(&self) -> Result<String> {
        let mut records: BTreeMap<String, CategoryRecord> = BTreeMap::new();
        for (part_type, entries) in &self.categories {
            if entries.is_empty() {
                continue;
            }
            let record = records.entry(part_type.to_string()).or_default();
            for entry in entries {
                record.parts.push(CountRecord {
                    name: entry.definition.name.clone(),
                    count: entry.count,
                });
            }
        }
        Ok(toml::to_string(&records)?)
    }

    /// Take one unit of `name` and build a live instance from it.
    ///
    /// Returns `None` and leaves the ledger untouched when nothing is stocked.
    pub fn try_take(&mut self, name: &str, ids: &mut PartIdAllocator) -> Option<PartInstance> {
        for entries in self.categories.values_mut() {
            let Some(idx) = entries.iter().position(|e| e.definition.name == name) else {
                continue;
            };
            let entry = &mut entries[idx];
            if entry.count == 0 {
                return None;
            }
            entry.count -= 1;
            let definition = entry.definition.clone();
            if entry.count == 0 {
                entries.remove(idx);
            }
            return Some(PartInstance::new(ids.allocate(), definition));
        }
        None
    }

    /// Return one unit of `definition`, creating the entry if needed.
    ///
    /// Entries stay sorted by name, so taking the last unit and adding it
    /// back restores the exact entry order.
    pub fn add(&mut self, definition: Arc<PartDefinition>) {
        if let Err(err) = self.add_count(definition, 1) {
            log::error!("{err}");
        }
    }

    /// Stock `count` units of `definition` in one step.
    ///
    /// Fails and leaves the ledger untouched if the entry would pass
    /// `u32::MAX`. Adding zero units does not create an entry.
    pub fn add_count(&mut self, definition: Arc<PartDefinition>, count: u32) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let entries = self.categories.entry(definition.part_type).or_default();
        match entries.binary_search_by(|e| e.definition.name.as_str().cmp(definition.name.as_str())) {
            Ok(idx) => {
                let entry = &mut entries[idx];
                entry.count = entry.count.checked_add(count).ok_or_else(|| EditorError::StockOverflow {
                    name: definition.name.clone(),
                })?;
            }
            Err(idx) => entries.insert(idx, InventoryEntry { definition, count }),
        }
        Ok(())
    }

    pub fn count(&self, name: &str) -> u32 {
        self.categories
            .values()
            .flat_map(|entries| entries.iter())
            .find(|e| e.definition.name == name)
            .map_or(0, |e| e.count)
    }

    pub fn entries_of_type(&self, part_type: PartType) -> &[InventoryEntry] {
        self.categories.get(&part_type).map_or(&[], |entries| entries.as_slice())
    }

    /// All entries, by part type then name. Item-mode hover indexes into
    /// this list.
    pub fn entries(&self) -> Vec<&InventoryEntry> {
        self.categories.values().flat_map(|entries| entries.iter()).collect()
    }

    pub fn entry_at(&self, index: usize) -> Option<&InventoryEntry> {
        self.categories.values().flat_map(|entries| entries.iter()).nth(index)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.values().map(|entries| entries.len()).sum()
    }

    /// Total units across all entries
    pub fn total(&self) -> u64 {
        self.categories.values().flat_map(|entries| entries.iter()).map(|e| u64::from(e.count)).sum()
    }

    /// `(name, count)` pairs in entry order
    pub fn counts(&self) -> Vec<(String, u32)> {
        self.entries().into_iter().map(|e| (e.definition.name.clone(), e.count)).collect()
    }
}
