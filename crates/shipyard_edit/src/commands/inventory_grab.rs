use crate::{EditorMode, NavigationSnapshot, PartInstance};

use super::{EditorContext, EditorOperation, Outcome};

/// Take one unit of the hovered inventory entry into the hand and switch to
/// grid mode with it
#[derive(Debug, Default)]
pub struct InventoryGrabCommand {
    name: Option<String>,
    prior: Option<NavigationSnapshot>,
}

impl InventoryGrabCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn hold_in_grid(&mut self, ctx: &mut EditorContext, part: PartInstance) {
        self.prior = Some(ctx.state.navigation());
        ctx.state.enter_grid_mode(ctx.presentation);
        ctx.state.hold_internal(part);
        let cursor = ctx.state.cursor();
        ctx.presentation.begin_lerp_to(cursor);
    }
}

impl EditorOperation for InventoryGrabCommand {
    fn get_description(&self) -> String {
        match &self.name {
            Some(name) => format!("Take {name}"),
            None => "Take part".to_string(),
        }
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if ctx.state.mode() != EditorMode::Item || ctx.state.is_holding() {
            return Outcome::Rejected;
        }
        let Some(name) = ctx
            .state
            .hovered_item()
            .and_then(|idx| ctx.inventory.entry_at(idx))
            .map(|entry| entry.definition.name.clone())
        else {
            return Outcome::Rejected;
        };
        let Some(part) = ctx.inventory.try_take(&name, ctx.ids) else {
            return Outcome::Rejected;
        };
        self.name = Some(name);
        self.hold_in_grid(ctx, part);
        Outcome::Done
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(prior) = self.prior else {
            return Outcome::Rejected;
        };
        if let Some(part) = ctx.state.take_held_internal() {
            ctx.inventory.add(part.definition().clone());
        }
        ctx.state.restore_navigation_internal(prior, ctx.presentation);
        Outcome::Done
    }

    /// Stock may have changed since the first take, so check it again
    fn redo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(name) = self.name.clone() else {
            return Outcome::Rejected;
        };
        if ctx.state.mode() != EditorMode::Item || ctx.state.is_holding() {
            return Outcome::Rejected;
        }
        match ctx.inventory.try_take(&name, ctx.ids) {
            Some(part) => {
                self.hold_in_grid(ctx, part);
                Outcome::Done
            }
            None => {
                log::warn!("Redo take: '{name}' is out of stock");
                Outcome::Rejected
            }
        }
    }
}
