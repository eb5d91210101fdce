//! Editor session
//!
//! Owns every piece of editor state plus the history, and is the only place
//! input enters. Each event is checked against the guard flags first, then
//! mapped to a command:
//!
//! | Event          | Item mode      | Grid mode                                |
//! |----------------|----------------|------------------------------------------|
//! | Submit         | InventoryGrab  | Place (if it fits) / Grab (part at cursor) |
//! | Cancel         | -              | ExitGridMode                             |
//! | ToggleMode     | EnterGridMode  | ExitGridMode                             |
//! | Navigate       | Navigate       | Navigate                                 |
//! | Rotate / Flip  | -              | Rotate / Flip (holding only)             |
//! | Delete         | -              | Delete (held, else part at cursor)       |
//! | Reset          | Reset          | Reset                                    |
//!
//! Undo/Redo go straight to the history. Zoom only toggles the expanded view
//! and is not recorded.

use crate::commands::{
    DeleteCommand, EditorCommand, EditorContext, EnterGridModeCommand, ExitGridModeCommand, FlipCommand, GrabCommand, InventoryGrabCommand,
    NavigateCommand, Outcome, PlaceCommand, ResetCommand, RotateCommand,
};
use crate::input::{InputEvent, RotateDirection, ZoomDirection};
use crate::snapshot::{EditorSnapshot, ModelSnapshot, PartSnapshot, StockSnapshot};
use crate::{
    Catalog, CommandHistory, EditorMode, EditorOptions, EditorState, Inventory, NullPresentation, OccupancyGrid, PartIdAllocator, PresentationSink,
    Result, Routine, Step,
};

/// What became of one input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A command ran (or a routine was scheduled)
    Applied,
    /// Folded into the previous navigate command
    Merged,
    /// Nothing to do for this event in the current state
    Ignored,
    /// A command was built but its preconditions failed
    Rejected,
    /// A routine is still running
    Blocked,
}

pub struct EditorSession<P: PresentationSink = NullPresentation> {
    catalog: Catalog,
    grid: OccupancyGrid,
    state: EditorState,
    inventory: Inventory,
    ids: PartIdAllocator,
    history: CommandHistory,
    presentation: P,
    pending: Option<Routine>,
    expanded: bool,
}

impl EditorSession<NullPresentation> {
    pub fn headless(catalog: Catalog, inventory: Inventory, options: EditorOptions) -> Self {
        Self::new(catalog, inventory, options, NullPresentation)
    }
}

impl<P: PresentationSink> EditorSession<P> {
    pub fn new(catalog: Catalog, inventory: Inventory, options: EditorOptions, mut presentation: P) -> Self {
        let mut state = EditorState::new(options);
        state.enter_item_mode(inventory.entry_count(), &mut presentation);
        Self {
            catalog,
            grid: OccupancyGrid::new(),
            state,
            inventory,
            ids: PartIdAllocator::new(),
            history: CommandHistory::new(),
            presentation,
            pending: None,
            expanded: false,
        }
    }

    fn split_context(&mut self) -> (EditorContext<'_>, &mut CommandHistory) {
        let ctx = EditorContext {
            grid: &mut self.grid,
            state: &mut self.state,
            inventory: &mut self.inventory,
            ids: &mut self.ids,
            presentation: &mut self.presentation,
        };
        (ctx, &mut self.history)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Input
    // ═══════════════════════════════════════════════════════════════════════

    pub fn dispatch(&mut self, event: InputEvent) -> Dispatch {
        if self.is_busy() {
            log::debug!("Blocked {event:?}: guards {:?}", self.state.guards());
            return Dispatch::Blocked;
        }
        let result = match event {
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
            InputEvent::Zoom(direction) => {
                self.expanded = direction == ZoomDirection::In;
                self.presentation.set_expanded(self.expanded);
                Dispatch::Applied
            }
            _ => match self.command_for(event) {
                Ok(command) => self.submit(command),
                Err(result) => result,
            },
        };
        log::info!("{event:?} -> {result:?}");
        result
    }

    /// Map an event to a command, or to the result of not issuing one
    fn command_for(&self, event: InputEvent) -> std::result::Result<EditorCommand, Dispatch> {
        let mode = self.state.mode();
        let cursor = self.state.cursor();
        let command: EditorCommand = match (event, mode) {
            (InputEvent::Navigate(delta), _) => NavigateCommand::new(delta).into(),
            (InputEvent::Reset, _) => ResetCommand::new().into(),
            (InputEvent::ToggleMode, EditorMode::Item) => EnterGridModeCommand::new().into(),
            (InputEvent::ToggleMode | InputEvent::Cancel, EditorMode::Grid) => ExitGridModeCommand::new().into(),
            (InputEvent::Submit, EditorMode::Item) => {
                let stocked = self.state.hovered_item().and_then(|idx| self.inventory.entry_at(idx)).is_some();
                if !stocked {
                    return Err(Dispatch::Ignored);
                }
                InventoryGrabCommand::new().into()
            }
            (InputEvent::Submit, EditorMode::Grid) => match self.state.held() {
                Some(held) if self.grid.can_place(cursor, held) => PlaceCommand::new().into(),
                Some(_) => return Err(Dispatch::Rejected),
                None if self.grid.get_at(cursor).is_some() => GrabCommand::new(cursor).into(),
                None => return Err(Dispatch::Ignored),
            },
            (InputEvent::Rotate(direction), EditorMode::Grid) if self.state.is_holding() => match direction {
                RotateDirection::Clockwise => RotateCommand::clockwise().into(),
                RotateDirection::CounterClockwise => RotateCommand::counter_clockwise().into(),
            },
            (InputEvent::Flip(axis), EditorMode::Grid) if self.state.is_holding() => FlipCommand::new(axis).into(),
            (InputEvent::Delete, EditorMode::Grid) if self.state.is_holding() || self.grid.get_at(cursor).is_some() => DeleteCommand::new().into(),
            _ => return Err(Dispatch::Ignored),
        };
        Ok(command)
    }

    /// Run a command through the history
    pub fn submit(&mut self, command: EditorCommand) -> Dispatch {
        if self.is_busy() {
            return Dispatch::Blocked;
        }
        let (mut ctx, history) = self.split_context();
        let outcome = history.execute(command, &mut ctx);
        self.settle(outcome)
    }

    pub fn undo(&mut self) -> Dispatch {
        if self.is_busy() {
            return Dispatch::Blocked;
        }
        let (mut ctx, history) = self.split_context();
        match history.undo(&mut ctx) {
            Some(outcome) => self.settle(outcome),
            None => Dispatch::Ignored,
        }
    }

    pub fn redo(&mut self) -> Dispatch {
        if self.is_busy() {
            return Dispatch::Blocked;
        }
        let (mut ctx, history) = self.split_context();
        match history.redo(&mut ctx) {
            Some(outcome) => self.settle(outcome),
            None => Dispatch::Ignored,
        }
    }

    fn settle(&mut self, outcome: Outcome) -> Dispatch {
        match outcome {
            Outcome::Done => Dispatch::Applied,
            Outcome::Merged => Dispatch::Merged,
            Outcome::Rejected => Dispatch::Rejected,
            Outcome::Pending(routine) => {
                let guard = routine.guard();
                log::debug!("Scheduling {routine:?}, raising {guard:?}");
                self.state.raise_guard_internal(guard);
                self.pending = Some(routine);
                Dispatch::Applied
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Scheduling
    // ═══════════════════════════════════════════════════════════════════════

    /// Advance the presentation one frame and the pending routine one step.
    /// Returns whether a routine is still running.
    pub fn tick(&mut self) -> bool {
        self.presentation.advance();
        let Some(mut routine) = self.pending.take() else {
            return false;
        };
        let (mut ctx, _) = self.split_context();
        match routine.step(&mut ctx) {
            Step::Yield => {
                self.pending = Some(routine);
                true
            }
            Step::Finished => {
                self.state.clear_guard_internal(routine.guard());
                log::debug!("Routine finished, guards now {:?}", self.state.guards());
                false
            }
        }
    }

    /// Tick until no routine is left, at most `max_ticks` times.
    /// Returns whether the session is idle.
    pub fn run_until_idle(&mut self, max_ticks: usize) -> bool {
        for _ in 0..max_ticks {
            if !self.is_busy() {
                return true;
            }
            self.tick();
        }
        !self.is_busy()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.state.is_guarded()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Add stock by catalog name outside of the history.
    ///
    /// Commands on the stacks assume the ledger they saw, so both stacks are
    /// cleared.
    pub fn stock(&mut self, name: &str, count: u32) -> Result<()> {
        let definition = self.catalog.require(name)?;
        self.inventory.add_count(definition, count)?;
        self.history.clear();
        if self.state.mode() == EditorMode::Item {
            self.state.enter_item_mode(self.inventory.entry_count(), &mut self.presentation);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        let mut parts: Vec<PartSnapshot> = self.grid.parts().map(PartSnapshot::from).collect();
        parts.sort();
        let inventory = self
            .inventory
            .entries()
            .into_iter()
            .map(|e| StockSnapshot {
                name: e.definition.name.clone(),
                count: e.count,
            })
            .collect();
        EditorSnapshot {
            model: ModelSnapshot {
                mode: self.state.mode(),
                cursor: self.state.cursor(),
                hovered_item: self.state.hovered_item(),
                held: self.state.held().map(PartSnapshot::from),
                parts,
                inventory,
            },
            undo_depth: self.history.undo_len(),
            redo_depth: self.history.redo_len(),
            busy: self.is_busy(),
        }
    }

    /// Grid keys match their parts, the held part is nowhere else and it sits
    /// on the cursor.
    pub fn is_consistent(&self) -> bool {
        if !self.grid.is_consistent() {
            return false;
        }
        match self.state.held() {
            Some(held) => !self.grid.contains_part(held.id()) && held.position == self.state.cursor(),
            None => true,
        }
    }
}
