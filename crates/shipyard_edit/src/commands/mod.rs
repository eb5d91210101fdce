//! Editor commands
//!
//! One type per user action. Every command captures the pre-state it needs to
//! invert itself when it executes:
//! - `navigate.rs` - Cursor / hover movement, the only command that merges
//! - `grab.rs` - Lift a placed part off the grid
//! - `place.rs` - Drop the held part at the cursor
//! - `transform.rs` - Rotate and flip the held part
//! - `delete.rs` - Return a part to the inventory
//! - `mode.rs` - Enter / exit grid mode
//! - `inventory_grab.rs` - Take the hovered inventory entry into the hand
//! - `reset.rs` - Return the cursor to its default cell

mod delete;
mod grab;
mod inventory_grab;
mod mode;
mod navigate;
mod place;
mod reset;
mod transform;

pub use delete::{DeleteCommand, DeleteTarget};
pub use grab::GrabCommand;
pub use inventory_grab::InventoryGrabCommand;
pub use mode::{EnterGridModeCommand, ExitGridModeCommand};
pub use navigate::NavigateCommand;
pub use place::PlaceCommand;
pub use reset::ResetCommand;
pub use transform::{FlipCommand, RotateCommand};

use crate::{Cell, EditorState, Inventory, OccupancyGrid, PartIdAllocator, PartInstance, PresentationSink, Routine, Transform};

/// Everything a command may touch, borrowed for one call
pub struct EditorContext<'a> {
    pub grid: &'a mut OccupancyGrid,
    pub state: &'a mut EditorState,
    pub inventory: &'a mut Inventory,
    pub ids: &'a mut PartIdAllocator,
    pub presentation: &'a mut dyn PresentationSink,
}

impl EditorContext<'_> {
    /// Entries item-mode hover wraps over
    pub fn item_count(&self) -> usize {
        self.inventory.entry_count()
    }

    /// Navigate the current mode by `delta`
    /// Navigate by `(dx, dy)`; `false` if the cursor cannot go there
    pub fn navigate(&mut self, dx: i64, dy: i64) -> bool {
        let item_count = self.inventory.entry_count();
        self.state.navigate(dx, dy, item_count, self.presentation)
    }
}

/// Result of executing, undoing or redoing a command
#[derive(Debug)]
pub enum Outcome {
    Done,
    /// Folded into the previous command; nothing was pushed
    Merged,
    /// Preconditions failed; nothing changed
    Rejected,
    /// State changed; the routine must run to completion before more input
    Pending(Routine),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected)
    }
}

/// Enough of a part instance to rebuild an equivalent one from the inventory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartRecord {
    pub name: String,
    pub transform: Transform,
    pub cell_placed_at: Option<Cell>,
}

impl PartRecord {
    pub fn capture(part: &PartInstance) -> Self {
        Self {
            name: part.name().to_string(),
            transform: part.transform,
            cell_placed_at: part.cell_placed_at,
        }
    }

    /// Copy the recorded runtime state onto a fresh instance
    pub fn restore_onto(&self, part: &mut PartInstance) {
        part.transform = self.transform;
        part.cell_placed_at = self.cell_placed_at;
    }
}

/// Trait for the individual command types
pub trait EditorOperation {
    /// Get a description of this command for display
    fn get_description(&self) -> String;

    fn execute(&mut self, ctx: &mut EditorContext) -> Outcome;

    fn undo(&mut self, ctx: &mut EditorContext) -> Outcome;

    /// Re-apply after an undo. Most commands simply execute again.
    fn redo(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.execute(ctx)
    }
}

#[derive(Debug)]
pub enum EditorCommand {
    Navigate(NavigateCommand),
    Grab(GrabCommand),
    Place(PlaceCommand),
    Rotate(RotateCommand),
    Flip(FlipCommand),
    Delete(DeleteCommand),
    EnterGridMode(EnterGridModeCommand),
    ExitGridMode(ExitGridModeCommand),
    InventoryGrab(InventoryGrabCommand),
    Reset(ResetCommand),
}

impl EditorCommand {
    fn operation(&mut self) -> &mut dyn EditorOperation {
        match self {
            EditorCommand::Navigate(cmd) => cmd,
            EditorCommand::Grab(cmd) => cmd,
            EditorCommand::Place(cmd) => cmd,
            EditorCommand::Rotate(cmd) => cmd,
            EditorCommand::Flip(cmd) => cmd,
            EditorCommand::Delete(cmd) => cmd,
            EditorCommand::EnterGridMode(cmd) => cmd,
            EditorCommand::ExitGridMode(cmd) => cmd,
            EditorCommand::InventoryGrab(cmd) => cmd,
            EditorCommand::Reset(cmd) => cmd,
        }
    }

    pub fn description(&self) -> String {
        match self {
            EditorCommand::Navigate(cmd) => cmd.get_description(),
            EditorCommand::Grab(cmd) => cmd.get_description(),
            EditorCommand::Place(cmd) => cmd.get_description(),
            EditorCommand::Rotate(cmd) => cmd.get_description(),
            EditorCommand::Flip(cmd) => cmd.get_description(),
            EditorCommand::Delete(cmd) => cmd.get_description(),
            EditorCommand::EnterGridMode(cmd) => cmd.get_description(),
            EditorCommand::ExitGridMode(cmd) => cmd.get_description(),
            EditorCommand::InventoryGrab(cmd) => cmd.get_description(),
            EditorCommand::Reset(cmd) => cmd.get_description(),
        }
    }

    pub fn execute(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.operation().execute(ctx)
    }

    pub fn undo(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.operation().undo(ctx)
    }

    pub fn redo(&mut self, ctx: &mut EditorContext) -> Outcome {
        self.operation().redo(ctx)
    }

    /// Try to fold `incoming` into this already executed command.
    ///
    /// On success this command has applied the incoming side effect itself
    /// and `incoming` must be dropped unexecuted.
    pub fn try_merge(&mut self, incoming: &EditorCommand, ctx: &mut EditorContext) -> bool {
        match (self, incoming) {
            (EditorCommand::Navigate(top), EditorCommand::Navigate(next)) => top.merge(next, ctx),
            _ => false,
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for EditorCommand {
                fn from(cmd: $ty) -> Self {
                    EditorCommand::$variant(cmd)
                }
            }
        )*
    };
}

impl_from_command! {
    Navigate => NavigateCommand,
    Grab => GrabCommand,
    Place => PlaceCommand,
    Rotate => RotateCommand,
    Flip => FlipCommand,
    Delete => DeleteCommand,
    EnterGridMode => EnterGridModeCommand,
    ExitGridMode => ExitGridModeCommand,
    InventoryGrab => InventoryGrabCommand,
    Reset => ResetCommand,
}
