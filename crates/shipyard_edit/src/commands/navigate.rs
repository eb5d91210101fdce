use crate::Cell;

use super::{EditorContext, EditorOperation, Outcome};

/// Move the cursor (grid mode) or the hover (item mode)
#[derive(Debug)]
pub struct NavigateCommand {
    delta: Cell,
    /// Sum of this delta and every merged one
    total: (i64, i64),
}

impl NavigateCommand {
    pub fn new(delta: Cell) -> Self {
        Self {
            delta,
            total: (delta.x.into(), delta.y.into()),
        }
    }

    /// Absorb `next`: apply only its own delta now, undo the sum later.
    /// Returns `false` without changes if `next` cannot be applied.
    pub(crate) fn merge(&mut self, next: &NavigateCommand, ctx: &mut EditorContext) -> bool {
        let (Some(x), Some(y)) = (
            self.total.0.checked_add(next.delta.x.into()),
            self.total.1.checked_add(next.delta.y.into()),
        ) else {
            return false;
        };
        if !ctx.navigate(next.delta.x.into(), next.delta.y.into()) {
            return false;
        }
        self.total = (x, y);
        true
    }
}

impl EditorOperation for NavigateCommand {
    fn get_description(&self) -> String {
        "Move cursor".to_string()
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if self.delta == Cell::ORIGIN || !ctx.navigate(self.delta.x.into(), self.delta.y.into()) {
            return Outcome::Rejected;
        }
        Outcome::Done
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let (x, y) = self.total;
        if ctx.navigate(x.saturating_neg(), y.saturating_neg()) {
            Outcome::Done
        } else {
            Outcome::Rejected
        }
    }

    fn redo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let (x, y) = self.total;
        if ctx.navigate(x, y) {
            Outcome::Done
        } else {
            Outcome::Rejected
        }
    }
}
