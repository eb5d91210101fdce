use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Cell, EditorError, Result};

/// Inclusive cell rectangle the grid cursor wraps inside
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min: Cell,
    pub max: Cell,
}

impl GridBounds {
    pub fn new(min: Cell, max: Cell) -> Self {
        Self {
            min: Cell::new(min.x.min(max.x), min.y.min(max.y)),
            max: Cell::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }

    /// Wrap `cell + (dx, dy)` into the bounds. X and Y wrap independently.
    pub fn wrap(&self, cell: Cell, dx: i64, dy: i64) -> Cell {
        Cell::new(
            wrap_axis(i64::from(cell.x), dx, self.min.x, self.width()),
            wrap_axis(i64::from(cell.y), dy, self.min.y, self.height()),
        )
    }
}

fn wrap_axis(value: i64, delta: i64, min: i32, len: i64) -> i32 {
    let offset = (value - i64::from(min)).rem_euclid(len) + delta.rem_euclid(len);
    // min + offset % len lies inside [min, max]
    i32::try_from(i64::from(min) + offset % len).unwrap_or(min)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    /// Initial cursor cell and the cell Reset returns to
    pub default_cursor: Cell,

    /// Item-mode hover fallback when nothing was hovered before
    pub default_item: usize,

    /// Cursor wraps inside these bounds; `None` is the unbounded grid
    pub grid_bounds: Option<GridBounds>,

    /// Frames a lerp takes in the trace presentation
    pub lerp_frames: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_cursor: Cell::ORIGIN,
            default_item: 0,
            grid_bounds: None,
            lerp_frames: 3,
        }
    }
}

impl EditorOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|e| EditorError::read_file(path, e.to_string()))?;
        let options: EditorOptions = toml::from_str(&txt)?;
        options.sanitized()
    }

    /// Load options, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error reading options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Normalize the bounds and pull the default cursor inside them.
    /// Bounds or a cursor past [`Cell::LIMIT`] are rejected.
    fn sanitized(mut self) -> Result<Self> {
        if let Some(bounds) = self.grid_bounds {
            let bounds = GridBounds::new(bounds.min, bounds.max);
            for corner in [bounds.min, bounds.max] {
                if !corner.in_range() {
                    return Err(EditorError::CellOutOfRange { cell: corner });
                }
            }
            if !bounds.contains(self.default_cursor) {
                log::warn!("Default cursor {} outside grid bounds, wrapping", self.default_cursor);
                self.default_cursor = bounds.wrap(self.default_cursor, 0, 0);
            }
            self.grid_bounds = Some(bounds);
        } else if !self.default_cursor.in_range() {
            return Err(EditorError::CellOutOfRange { cell: self.default_cursor });
        }
        Ok(self)
    }
}
