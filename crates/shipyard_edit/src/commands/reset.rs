use crate::Cell;

use super::{EditorContext, EditorOperation, Outcome};

/// Send the cursor back to its default cell.
///
/// Only the cursor is restored on undo; placements made before the reset are
/// left alone. The mode is kept as well, since undo would not restore it.
#[derive(Debug, Default)]
pub struct ResetCommand {
    prior_cursor: Option<Cell>,
}

impl ResetCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorOperation for ResetCommand {
    fn get_description(&self) -> String {
        "Reset view".to_string()
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.prior_cursor = Some(ctx.state.cursor());
        let target = ctx.state.options().default_cursor;
        ctx.state.set_cursor_internal(target, ctx.presentation);
        ctx.presentation.reset_scale();
        Outcome::Done
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(prior) = self.prior_cursor else {
            return Outcome::Rejected;
        };
        ctx.state.set_cursor_internal(prior, ctx.presentation);
        Outcome::Done
    }
}
