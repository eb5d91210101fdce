//! Internal setters for commands
//!
//! These change state directly without any undo bookkeeping. Commands call
//! them when executing and when restoring captured pre-state.

use crate::{Cell, Highlight, PartInstance, PresentationSink};

use super::{EditorMode, EditorState, GuardFlags, NavigationSnapshot};

impl EditorState {
    /// Set the cursor (no wrapping). A held part follows it.
    pub(crate) fn set_cursor_internal(&mut self, cell: Cell, presentation: &mut dyn PresentationSink) {
        self.cursor = cell;
        if let Some(part) = self.held.as_mut() {
            part.position = cell;
            presentation.begin_lerp_to(cell);
        }
        if self.mode == EditorMode::Grid {
            presentation.update_highlight(Highlight::Cell(cell));
        }
    }

    /// Restore a captured navigation state
    pub(crate) fn restore_navigation_internal(&mut self, snapshot: NavigationSnapshot, presentation: &mut dyn PresentationSink) {
        self.mode = snapshot.mode;
        self.hovered_item = snapshot.hovered_item;
        self.last_hovered_item = snapshot.last_hovered_item;
        self.set_cursor_internal(snapshot.cursor, presentation);
        match (self.mode, self.hovered_item) {
            (EditorMode::Item, Some(item)) => {
                presentation.update_highlight(Highlight::Item(item));
                presentation.match_scale(item);
            }
            (EditorMode::Grid, _) => presentation.reset_scale(),
            _ => {}
        }
    }

    /// Hold `part` at the cursor
    pub(crate) fn hold_internal(&mut self, mut part: PartInstance) {
        part.position = self.cursor;
        self.held = Some(part);
    }

    pub(crate) fn take_held_internal(&mut self) -> Option<PartInstance> {
        self.held.take()
    }

    pub(crate) fn held_mut_internal(&mut self) -> Option<&mut PartInstance> {
        self.held.as_mut()
    }

    pub(crate) fn raise_guard_internal(&mut self, guard: GuardFlags) {
        self.guards.insert(guard);
    }

    pub(crate) fn clear_guard_internal(&mut self, guard: GuardFlags) {
        self.guards.remove(guard);
    }
}
