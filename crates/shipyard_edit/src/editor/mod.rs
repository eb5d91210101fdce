//! Editor state
//!
//! The single mutable record of what the user is doing: mode, held part,
//! grid cursor, item hover and the guard flags raised by running routines.
//!
//! - `mod.rs` - Struct definition, constructors, getters
//! - `navigation.rs` - Cursor/hover movement and the Item/Grid mode machine
//! - `internal.rs` - Internal setters used by commands when undoing

mod internal;
mod navigation;

use bitflags::bitflags;
use serde::Serialize;

use crate::{Cell, EditorOptions, PartInstance};

pub use navigation::NavigationSnapshot;

/// Which surface input navigates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum EditorMode {
    /// Inventory item list
    #[default]
    Item,
    /// Ship grid
    Grid,
}

bitflags! {
    /// Set while an animated routine is in flight; input is rejected meanwhile
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct GuardFlags: u8 {
        const MID_GRAB = 0b0000_0001;
        const MID_UNDO_DELETE = 0b0000_0010;
    }
}

pub struct EditorState {
    pub(crate) mode: EditorMode,

    /// Part under direct manipulation; never also in the grid or inventory.
    /// Its position always equals `cursor`.
    pub(crate) held: Option<PartInstance>,

    /// Grid cursor. Survives trips to item mode, so re-entering grid mode
    /// resumes at the last visited cell.
    pub(crate) cursor: Cell,

    /// Hovered inventory entry; `None` outside item mode
    pub(crate) hovered_item: Option<usize>,

    /// Hover to restore when item mode is entered again
    pub(crate) last_hovered_item: Option<usize>,

    pub(crate) guards: GuardFlags,

    pub(crate) options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl EditorState {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            mode: EditorMode::Item,
            held: None,
            cursor: options.default_cursor,
            hovered_item: Some(options.default_item),
            last_hovered_item: None,
            guards: GuardFlags::empty(),
            options,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn held(&self) -> Option<&PartInstance> {
        self.held.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    pub fn hovered_item(&self) -> Option<usize> {
        self.hovered_item
    }

    pub fn last_hovered_item(&self) -> Option<usize> {
        self.last_hovered_item
    }

    pub fn guards(&self) -> GuardFlags {
        self.guards
    }

    /// Whether any routine currently blocks input
    pub fn is_guarded(&self) -> bool {
        !self.guards.is_empty()
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }
}
