use crate::{EditorMode, NavigationSnapshot};

use super::{EditorContext, EditorOperation, Outcome, PartRecord};

/// Switch from item mode to grid mode
#[derive(Debug, Default)]
pub struct EnterGridModeCommand {
    prior: Option<NavigationSnapshot>,
}

impl EnterGridModeCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorOperation for EnterGridModeCommand {
    fn get_description(&self) -> String {
        "Enter grid mode".to_string()
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if ctx.state.mode() == EditorMode::Grid {
            return Outcome::Rejected;
        }
        self.prior = Some(ctx.state.navigation());
        ctx.state.enter_grid_mode(ctx.presentation);
        Outcome::Done
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(prior) = self.prior else {
            return Outcome::Rejected;
        };
        ctx.state.restore_navigation_internal(prior, ctx.presentation);
        Outcome::Done
    }
}

/// Switch from grid mode back to item mode.
///
/// A held part cannot leave grid mode, so it goes back to the inventory.
#[derive(Debug, Default)]
pub struct ExitGridModeCommand {
    prior: Option<NavigationSnapshot>,
    returned: Option<PartRecord>,
}

impl ExitGridModeCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Part that went back to the inventory on exit
    pub fn returned(&self) -> Option<&PartRecord> {
        self.returned.as_ref()
    }
}

impl EditorOperation for ExitGridModeCommand {
    fn get_description(&self) -> String {
        "Exit grid mode".to_string()
    }

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        if ctx.state.mode() != EditorMode::Grid {
            return Outcome::Rejected;
        }
        self.prior = Some(ctx.state.navigation());
        self.returned = ctx.state.take_held_internal().map(|part| {
            let record = PartRecord::capture(&part);
            ctx.inventory.add(part.definition().clone());
            record
        });
        let item_count = ctx.item_count();
        ctx.state.enter_item_mode(item_count, ctx.presentation);
        Outcome::Done
    }

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        let Some(prior) = self.prior else {
            return Outcome::Rejected;
        };
        ctx.state.restore_navigation_internal(prior, ctx.presentation);
        if let Some(record) = &self.returned {
            match ctx.inventory.try_take(&record.name, ctx.ids) {
                Some(mut part) => {
                    record.restore_onto(&mut part);
                    ctx.state.hold_internal(part);
                }
                None => log::warn!("Exit grid mode undo: '{}' is no longer in the inventory", record.name),
            }
        }
        Outcome::Done
    }
}
