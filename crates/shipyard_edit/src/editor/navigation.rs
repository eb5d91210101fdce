//! Cursor movement and the Item/Grid mode machine
//!
//! Both cursors wrap instead of clamping so a movement is always undone
//! exactly by the opposite movement:
//! - The grid cursor wraps inside `EditorOptions::grid_bounds` (if set),
//!   X and Y independently, using `rem_euclid`. Without bounds it stops at
//!   [`Cell::LIMIT`] and a move past that is refused.
//! - The item hover wraps over the inventory entry list.
//!
//! Mode transitions are `pub(crate)`: only the enter/exit grid mode commands
//! call them, so every transition is on the undo stack.

use crate::{Cell, Highlight, PresentationSink};

use super::{EditorMode, EditorState};

/// Navigation part of the editor state, captured by commands that change mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub mode: EditorMode,
    pub cursor: Cell,
    pub hovered_item: Option<usize>,
    pub last_hovered_item: Option<usize>,
}

impl EditorState {
    pub fn navigation(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            mode: self.mode,
            cursor: self.cursor,
            hovered_item: self.hovered_item,
            last_hovered_item: self.last_hovered_item,
        }
    }

    /// Apply a directional delta to whatever the current mode navigates.
    /// Returns `false`, leaving everything as is, when the grid cursor
    /// would leave the addressable range.
    pub fn navigate(&mut self, dx: i64, dy: i64, item_count: usize, presentation: &mut dyn PresentationSink) -> bool {
        match self.mode {
            EditorMode::Grid => self.move_cursor(dx, dy, presentation),
            // Lists run top to bottom: right and down advance.
            EditorMode::Item => {
                self.move_hover(dx.saturating_sub(dy), item_count, presentation);
                true
            }
        }
    }

    /// Move the grid cursor by `(dx, dy)`, wrapping inside the grid bounds.
    /// A held part follows the cursor.
    pub fn move_cursor(&mut self, dx: i64, dy: i64, presentation: &mut dyn PresentationSink) -> bool {
        let target = match self.options.grid_bounds {
            Some(bounds) => bounds.wrap(self.cursor, dx, dy),
            None => match self.cursor.checked_offset(dx, dy) {
                Some(target) => target,
                None => {
                    log::debug!("Cursor {} cannot move by ({dx}, {dy})", self.cursor);
                    return false;
                }
            },
        };
        self.set_cursor_internal(target, presentation);
        true
    }

    /// Move the item hover by `delta` entries, wrapping over `item_count`
    pub fn move_hover(&mut self, delta: i64, item_count: usize, presentation: &mut dyn PresentationSink) {
        if item_count == 0 {
            return;
        }
        let count = item_count as i64;
        let current = self.hovered_item.unwrap_or(self.options.default_item) as i64 % count;
        let next = ((current + delta.rem_euclid(count)) % count) as usize;
        self.hovered_item = Some(next);
        presentation.update_highlight(Highlight::Item(next));
        presentation.match_scale(next);
    }

    /// Switch to grid mode, resuming at the last visited cell
    pub(crate) fn enter_grid_mode(&mut self, presentation: &mut dyn PresentationSink) {
        if self.hovered_item.is_some() {
            self.last_hovered_item = self.hovered_item;
        }
        self.hovered_item = None;
        self.mode = EditorMode::Grid;
        presentation.reset_scale();
        presentation.update_highlight(Highlight::Cell(self.cursor));
    }

    /// Switch to item mode, restoring the last hovered entry or the default
    pub(crate) fn enter_item_mode(&mut self, item_count: usize, presentation: &mut dyn PresentationSink) {
        self.mode = EditorMode::Item;
        let wanted = self.last_hovered_item.unwrap_or(self.options.default_item);
        self.hovered_item = (item_count > 0).then(|| wanted.min(item_count - 1));
        if let Some(item) = self.hovered_item {
            presentation.update_highlight(Highlight::Item(item));
            presentation.match_scale(item);
        }
    }
}
