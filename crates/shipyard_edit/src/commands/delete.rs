use crate::{Cell, EditorMode, PartInstance, Routine};

use super::{EditorContext, EditorOperation, Outcome, PartRecord};

/// Where a deleted part came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    /// The part in the hand
    Held,
    /// A placed part, by center cell
    Grid { center: Cell },
}

/// Return a part to the inventory and destroy the instance.
///
/// Deletes the held part if there is one, otherwise the part under the grid
/// cursor. Undo takes an equivalent part back out of the inventory through a
/// [`Routine`], since the held case has to wait for a lerp.
#[derive(Debug, Default)]
pub struct DeleteCommand {
    deleted: Option<(DeleteTarget, PartRecord)>,
}

impl DeleteCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<DeleteTarget> {
        self.deleted.as_ref().map(|(target, _)| *target)
    }

    fn destroy(ctx: &mut EditorContext, part: PartInstance) {
        log::debug!("Deleting {} {}", part.name(), part.id());
        ctx.inventory.add(part.definition().clone());
    }
}

impl EditorOperation for DeleteCommand {
    fn get_description(&self) -> String {
        match &self.deleted {
            Some((_, record)) => format!("Delete {}", record.name),
            None => "Delete".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if let Some(part) = ctx.state.take_held_internal() {
            self.deleted = Some((DeleteTarget::Held, PartRecord::capture(&part)));
            Self::destroy(ctx, part);
            return Outcome::Done;
        }
        if ctx.state.mode() != EditorMode::Grid {
            return Outcome::Rejected;
        }
        let Some(part) = ctx.grid.remove(ctx.state.cursor()) else {
            return Outcome::Rejected;
        };
        self.deleted = Some((DeleteTarget::Grid { center: part.position }, PartRecord::capture(&part)));
        Self::destroy(ctx, part);
        Outcome::Done
    }

    fn undo(&mut self, _ctx: &mut EditorContext) -> Outcome {
        let Some((target, record)) = self.deleted.clone() else {
            return Outcome::Rejected;
        };
        log::debug!("Scheduling restore of {}", record.name);
        Outcome::Pending(Routine::restore_deleted(record, target))
    }

    fn redo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some((target, record)) = &self.deleted else {
            return Outcome::Rejected;
        };
        let part = match *target {
            DeleteTarget::Held => ctx.state.take_held_internal(),
            DeleteTarget::Grid { center } => ctx.grid.remove(record.cell_placed_at.unwrap_or(center)),
        };
        match part {
            Some(part) => {
                Self::destroy(ctx, part);
                Outcome::Done
            }
            None => {
                log::warn!("Redo delete: {} is gone", record.name);
                Outcome::Rejected
            }
        }
    }
}
