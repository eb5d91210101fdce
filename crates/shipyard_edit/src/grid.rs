//! Occupancy grid
//!
//! Sparse mapping from cell to the part covering it. Only enabled segments are
//! keyed. Placement and removal are all-or-nothing: a part is either keyed on
//! every cell of its footprint or on none.

use std::collections::HashMap;

use crate::{Cell, PartId, PartInstance};

#[derive(Debug, Default)]
pub struct OccupancyGrid {
    cells: HashMap<Cell, PartId>,
    parts: HashMap<PartId, PartInstance>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff every cell `part` would cover at `center` is free
    pub fn can_place(&self, center: Cell, part: &PartInstance) -> bool {
        let cells = part.cells_at(center);
        !cells.is_empty() && cells.iter().all(|c| !self.cells.contains_key(c))
    }

    /// Place `part` centered on `center`.
    ///
    /// On success the part's `position` is `center` and its `cell_placed_at`
    /// is the last cell in canonical order, which is returned. On conflict the
    /// grid is unchanged and the part is handed back.
    pub fn place(&mut self, center: Cell, mut part: PartInstance) -> Result<Cell, PartInstance> {
        if !self.can_place(center, &part) {
            return Err(part);
        }
        let cells = part.cells_at(center);
        let id = part.id();
        let mut placed_at = center;
        for cell in cells {
            self.cells.insert(cell, id);
            placed_at = cell;
        }
        part.position = center;
        part.cell_placed_at = Some(placed_at);
        self.parts.insert(id, part);
        Ok(placed_at)
    }

    /// Remove the part covering `cell`, if any.
    ///
    /// The keys to erase come from the part's own position and transform, not
    /// from the queried cell, so every key of the part goes at once.
    pub fn remove(&mut self, cell: Cell) -> Option<PartInstance> {
        let id = *self.cells.get(&cell)?;
        let part = self.parts.remove(&id)?;
        for c in part.cells() {
            if self.cells.get(&c) == Some(&id) {
                self.cells.remove(&c);
            }
        }
        Some(part)
    }

    pub fn get_at(&self, cell: Cell) -> Option<&PartInstance> {
        self.cells.get(&cell).and_then(|id| self.parts.get(id))
    }

    pub fn part(&self, id: PartId) -> Option<&PartInstance> {
        self.parts.get(&id)
    }

    pub fn contains_part(&self, id: PartId) -> bool {
        self.parts.contains_key(&id)
    }

    pub fn parts(&self) -> impl Iterator<Item = &PartInstance> {
        self.parts.values()
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = (&Cell, &PartId)> {
        self.cells.iter()
    }

    /// Number of placed parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Every key maps to a stored part whose footprint contains the key, and
    /// every stored part is keyed on its whole footprint.
    pub fn is_consistent(&self) -> bool {
        let keys_valid = self
            .cells
            .iter()
            .all(|(cell, id)| self.parts.get(id).is_some_and(|p| p.cells().contains(cell)));
        let parts_keyed = self
            .parts
            .values()
            .all(|p| p.cells().iter().all(|c| self.cells.get(c) == Some(&p.id())));
        keys_valid && parts_keyed
    }
}
