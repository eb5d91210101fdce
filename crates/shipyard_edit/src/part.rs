//! Part definitions and live part instances

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geometry::{resolve_cells, Cell, Footprint, Transform};
use crate::{EditorError, Result};

/// Category tag of a part definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartType {
    Cabin,
    Core,
    Wing,
    Weapon,
    Utility,
}

impl PartType {
    pub const ALL: [PartType; 5] = [PartType::Cabin, PartType::Core, PartType::Wing, PartType::Weapon, PartType::Utility];
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartType::Cabin => write!(f, "Cabin"),
            PartType::Core => write!(f, "Core"),
            PartType::Wing => write!(f, "Wing"),
            PartType::Weapon => write!(f, "Weapon"),
            PartType::Utility => write!(f, "Utility"),
        }
    }
}

impl std::str::FromStr for PartType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        PartType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| EditorError::generic(format!("unknown part type '{s}'")))
    }
}

/// Immutable part template, owned by the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    pub name: String,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub mass: f32,
    #[serde(default)]
    pub price: u32,
    pub part_type: PartType,
    #[serde(default)]
    pub footprint: Footprint,
}

impl PartDefinition {
    pub fn new(name: impl Into<String>, part_type: PartType, footprint: Footprint) -> Self {
        Self {
            name: name.into(),
            sprite: String::new(),
            mass: 0.0,
            price: 0,
            part_type,
            footprint,
        }
    }
}

/// Identity of a live part instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u64);

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh instance ids for one editor session
#[derive(Debug, Default)]
pub struct PartIdAllocator {
    next: u64,
}

impl PartIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> PartId {
        let id = PartId(self.next);
        self.next += 1;
        id
    }
}

/// A live part, either placed in the grid or held by the editor.
///
/// Values of this type are moved between the grid and the held slot, never
/// cloned, so a part can only ever be in one of them.
#[derive(Debug)]
pub struct PartInstance {
    id: PartId,
    definition: Arc<PartDefinition>,
    /// Center cell
    pub position: Cell,
    /// Canonical cell recorded by the last successful placement
    pub cell_placed_at: Option<Cell>,
    pub transform: Transform,
}

impl PartInstance {
    pub fn new(id: PartId, definition: Arc<PartDefinition>) -> Self {
        Self {
            id,
            definition,
            position: Cell::ORIGIN,
            cell_placed_at: None,
            transform: Transform::default(),
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn definition(&self) -> &Arc<PartDefinition> {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn part_type(&self) -> PartType {
        self.definition.part_type
    }

    /// Cells covered at the part's own position
    pub fn cells(&self) -> Vec<Cell> {
        self.cells_at(self.position)
    }

    /// Cells the part would cover centered on `center`
    pub fn cells_at(&self, center: Cell) -> Vec<Cell> {
        resolve_cells(&self.definition.footprint, &self.transform, center)
    }
}
