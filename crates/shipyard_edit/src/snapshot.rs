//! Serializable view of a session
//!
//! Instance ids are left out. Undoing a delete brings back an equivalent part
//! under a new id, and the two snapshots compare equal.

use serde::Serialize;

use crate::{Cell, EditorMode, PartInstance, Transform};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PartSnapshot {
    pub position: Cell,
    pub name: String,
    pub cell_placed_at: Option<Cell>,
    pub rotation: i32,
    pub x_flipped: bool,
    pub y_flipped: bool,
}

impl From<&PartInstance> for PartSnapshot {
    fn from(part: &PartInstance) -> Self {
        let Transform { x_flipped, y_flipped, rotation } = part.transform;
        Self {
            position: part.position,
            name: part.name().to_string(),
            cell_placed_at: part.cell_placed_at,
            rotation: rotation.degrees(),
            x_flipped,
            y_flipped,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockSnapshot {
    pub name: String,
    pub count: u32,
}

/// Editor model state: everything undo has to restore
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModelSnapshot {
    pub mode: EditorMode,
    pub cursor: Cell,
    pub hovered_item: Option<usize>,
    pub held: Option<PartSnapshot>,
    /// Placed parts, sorted by position then name
    pub parts: Vec<PartSnapshot>,
    /// Inventory entries in hover order
    pub inventory: Vec<StockSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditorSnapshot {
    #[serde(flatten)]
    pub model: ModelSnapshot,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub busy: bool,
}
