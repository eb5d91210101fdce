use crate::{Cell, EditorMode, Routine};

use super::{EditorContext, EditorOperation, Outcome};

/// Lift the part under a grid cell into the hand.
///
/// The cursor jumps to the part's center so the held part stays where it was
/// on screen; the lift itself is a lerp the editor waits for.
#[derive(Debug)]
pub struct GrabCommand {
    cell: Cell,
    name: Option<String>,
    origin: Option<Cell>,
    prior_cursor: Cell,
}

impl GrabCommand {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            name: None,
            origin: None,
            prior_cursor: cell,
        }
    }

    /// Center cell the part was lifted from, once executed
    pub fn origin(&self) -> Option<Cell> {
        self.origin
    }
}

impl EditorOperation for GrabCommand {
    fn get_description(&self) -> String {
        match &self.name {
            Some(name) => format!("Grab {name}"),
            None => "Grab".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if ctx.state.mode() != EditorMode::Grid || ctx.state.is_holding() {
            return Outcome::Rejected;
        }
        let Some(part) = ctx.grid.remove(self.cell) else {
            return Outcome::Rejected;
        };
        let origin = part.position;
        self.name = Some(part.name().to_string());
        self.origin = Some(origin);
        self.prior_cursor = ctx.state.cursor();

        ctx.state.set_cursor_internal(origin, ctx.presentation);
        ctx.state.hold_internal(part);
        ctx.presentation.begin_lerp_to(origin);
        Outcome::Pending(Routine::grab_lerp())
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let (Some(origin), Some(part)) = (self.origin, ctx.state.take_held_internal()) else {
            return Outcome::Rejected;
        };
        if let Err(part) = ctx.grid.place(origin, part) {
            log::warn!("Grab undo: origin {origin} is occupied");
            ctx.state.hold_internal(part);
            return Outcome::Rejected;
        }
        ctx.state.set_cursor_internal(self.prior_cursor, ctx.presentation);
        Outcome::Done
    }
}
