use crate::Cell;

use super::{EditorContext, EditorOperation, Outcome};

/// Drop the held part centered on the cursor
#[derive(Debug, Default)]
pub struct PlaceCommand {
    name: Option<String>,
    /// Canonical cell the grid recorded; undo lifts the part from here
    placed_at: Option<Cell>,
    /// The held part's `cell_placed_at` before the drop
    prior_placed_at: Option<Cell>,
}

impl PlaceCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placed_at(&self) -> Option<Cell> {
        self.placed_at
    }
}

impl EditorOperation for PlaceCommand {
    fn get_description(&self) -> String {
        match &self.name {
            Some(name) => format!("Place {name}"),
            None => "Place".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(part) = ctx.state.take_held_internal() else {
            return Outcome::Rejected;
        };
        let center = ctx.state.cursor();
        let name = part.name().to_string();
        let prior_placed_at = part.cell_placed_at;
        match ctx.grid.place(center, part) {
            Ok(cell) => {
                self.name = Some(name);
                self.placed_at = Some(cell);
                self.prior_placed_at = prior_placed_at;
                Outcome::Done
            }
            Err(part) => {
                log::debug!("Cannot place {name} at {center}");
                ctx.state.hold_internal(part);
                Outcome::Rejected
            }
        }
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        if ctx.state.is_holding() {
            return Outcome::Rejected;
        }
        let Some(mut part) = self.placed_at.and_then(|cell| ctx.grid.remove(cell)) else {
            return Outcome::Rejected;
        };
        part.cell_placed_at = self.prior_placed_at;
        ctx.state.hold_internal(part);
        Outcome::Done
    }
}
