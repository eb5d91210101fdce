//! Grid geometry and part transforms
//!
//! A part's footprint is a 3×3 block of segments. Local index `(x, y)` has
//! `y = 0` on the top row, so the unflipped offset of a segment from the part
//! center is `(x - 1, 1 - y)` with y growing upward.
//!
//! Cells are resolved in a fixed order: flip first, then rotate, then
//! translate to the center cell. Flipping is always in the part's local frame;
//! callers that want a screen-space flip go through [`Transform::flip`], which
//! remaps the axis while the part sits at a quarter turn.

use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{EditorError, Result};

// ═══════════════════════════════════════════════════════════════════════════
// Cell
// ═══════════════════════════════════════════════════════════════════════════

/// Integer grid coordinate. The grid is sparse and has no inherent bounds.
///
/// The operators wrap at the `i32` range. Cursor movement goes through
/// [`Cell::checked_offset`], which keeps the cursor within [`Cell::LIMIT`]
/// so a footprint around it never wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    /// Largest coordinate magnitude the cursor may take. Footprints reach
    /// one cell past their center.
    pub const LIMIT: i32 = i32::MAX - 1;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_range(self) -> bool {
        (-Self::LIMIT..=Self::LIMIT).contains(&self.x) && (-Self::LIMIT..=Self::LIMIT).contains(&self.y)
    }

    /// `self + (dx, dy)`, or `None` if the result leaves the cursor range
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Cell> {
        let x = i32::try_from(i64::from(self.x).checked_add(dx)?).ok()?;
        let y = i32::try_from(i64::from(self.y).checked_add(dy)?).ok()?;
        Some(Cell::new(x, y)).filter(|cell| cell.in_range())
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Cell) {
        *self = *self + rhs;
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Neg for Cell {
    type Output = Cell;

    fn neg(self) -> Cell {
        Cell::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Segments
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentState {
    #[default]
    Disabled,
    Enabled,
}

/// Connection state of one segment edge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeState {
    Blocked,
    #[default]
    Disabled,
    Enabled,
}

/// One of the nine footprint positions of a part
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub state: SegmentState,
    pub top: EdgeState,
    pub left: EdgeState,
    pub right: EdgeState,
    pub bottom: EdgeState,
}

impl Segment {
    pub const DISABLED: Segment = Segment {
        state: SegmentState::Disabled,
        top: EdgeState::Disabled,
        left: EdgeState::Disabled,
        right: EdgeState::Disabled,
        bottom: EdgeState::Disabled,
    };

    pub const ENABLED: Segment = Segment {
        state: SegmentState::Enabled,
        top: EdgeState::Enabled,
        left: EdgeState::Enabled,
        right: EdgeState::Enabled,
        bottom: EdgeState::Enabled,
    };

    pub fn is_enabled(&self) -> bool {
        self.state == SegmentState::Enabled
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Footprint
// ═══════════════════════════════════════════════════════════════════════════

/// 3×3 segment template of a part, stored row-major (`y * 3 + x`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FootprintRecord", into = "FootprintRecord")]
pub struct Footprint {
    segments: [Segment; 9],
}

impl Default for Footprint {
    fn default() -> Self {
        Self::single()
    }
}

impl Footprint {
    pub const SIZE: usize = 3;

    pub fn new(segments: [Segment; 9]) -> Self {
        Self { segments }
    }

    /// Footprint with only the center segment enabled
    pub fn single() -> Self {
        let mut segments = [Segment::DISABLED; 9];
        segments[4] = Segment::ENABLED;
        Self { segments }
    }

    /// Build a footprint from an enabled mask, `mask[y][x]`
    pub fn from_mask(mask: [[bool; 3]; 3]) -> Self {
        let mut segments = [Segment::DISABLED; 9];
        for (y, row) in mask.iter().enumerate() {
            for (x, &enabled) in row.iter().enumerate() {
                if enabled {
                    segments[y * 3 + x] = Segment::ENABLED;
                }
            }
        }
        Self { segments }
    }

    pub fn segment(&self, x: usize, y: usize) -> &Segment {
        &self.segments[y * 3 + x]
    }

    pub fn segment_mut(&mut self, x: usize, y: usize) -> &mut Segment {
        &mut self.segments[y * 3 + x]
    }

    pub fn enabled_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_enabled()).count()
    }

    pub fn mask(&self) -> [[bool; 3]; 3] {
        let mut mask = [[false; 3]; 3];
        for (y, row) in mask.iter_mut().enumerate() {
            for (x, enabled) in row.iter_mut().enumerate() {
                *enabled = self.segment(x, y).is_enabled();
            }
        }
        mask
    }
}

/// Serialized footprint: three mask rows (`#` enabled, `.` disabled) plus
/// optional edge overrides for enabled segments.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct FootprintRecord {
    mask: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    edges: Vec<EdgeRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct EdgeRecord {
    x: usize,
    y: usize,
    #[serde(default = "enabled_edge")]
    top: EdgeState,
    #[serde(default = "enabled_edge")]
    left: EdgeState,
    #[serde(default = "enabled_edge")]
    right: EdgeState,
    #[serde(default = "enabled_edge")]
    bottom: EdgeState,
}

fn enabled_edge() -> EdgeState {
    EdgeState::Enabled
}

impl TryFrom<FootprintRecord> for Footprint {
    type Error = EditorError;

    fn try_from(record: FootprintRecord) -> Result<Self> {
        if record.mask.len() != 3 {
            return Err(EditorError::generic(format!("footprint mask needs 3 rows, got {}", record.mask.len())));
        }
        let mut mask = [[false; 3]; 3];
        for (y, row) in record.mask.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 3 {
                return Err(EditorError::generic(format!("footprint row {y} needs 3 columns: '{row}'")));
            }
            for (x, ch) in chars.into_iter().enumerate() {
                mask[y][x] = match ch {
                    '#' => true,
                    '.' => false,
                    other => return Err(EditorError::generic(format!("unexpected footprint character '{other}'"))),
                };
            }
        }

        let mut footprint = Footprint::from_mask(mask);
        for edge in record.edges {
            if edge.x > 2 || edge.y > 2 {
                return Err(EditorError::generic(format!("edge override outside footprint at ({}, {})", edge.x, edge.y)));
            }
            let segment = footprint.segment_mut(edge.x, edge.y);
            if !segment.is_enabled() {
                continue;
            }
            segment.top = edge.top;
            segment.left = edge.left;
            segment.right = edge.right;
            segment.bottom = edge.bottom;
        }
        Ok(footprint)
    }
}

impl From<Footprint> for FootprintRecord {
    fn from(footprint: Footprint) -> Self {
        let mask = footprint
            .mask()
            .iter()
            .map(|row| row.iter().map(|&e| if e { '#' } else { '.' }).collect())
            .collect();

        let mut edges = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                let s = footprint.segment(x, y);
                if s.is_enabled() && *s != Segment::ENABLED {
                    edges.push(EdgeRecord {
                        x,
                        y,
                        top: s.top,
                        left: s.left,
                        right: s.right,
                        bottom: s.bottom,
                    });
                }
            }
        }
        FootprintRecord { mask, edges }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rotation / Flip
// ═══════════════════════════════════════════════════════════════════════════

/// Quarter-turn rotation, counter-clockwise with y up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Normalizes to `0..360`. Anything that is not a quarter turn is `None`.
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn rotated_ccw(self) -> Rotation {
        self + Rotation::Deg90
    }

    pub fn rotated_cw(self) -> Rotation {
        self + Rotation::Deg270
    }

    /// Inverse rotation (`self + self.inverse() == Deg0`)
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }

    /// 90° or 270°, where the local axes are swapped on screen
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    pub fn apply(self, offset: Cell) -> Cell {
        let Cell { x, y } = offset;
        match self {
            Rotation::Deg0 => Cell::new(x, y),
            Rotation::Deg90 => Cell::new(-y, x),
            Rotation::Deg180 => Cell::new(-x, -y),
            Rotation::Deg270 => Cell::new(y, -x),
        }
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        let quarter = (self as u8 + rhs as u8) % 4;
        Rotation::ALL[quarter as usize]
    }
}

impl TryFrom<i32> for Rotation {
    type Error = EditorError;

    fn try_from(degrees: i32) -> Result<Self> {
        Rotation::from_degrees(degrees).ok_or(EditorError::InvalidRotation { degrees })
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> i32 {
        rotation.degrees()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipAxis {
    Horizontal,
    Vertical,
}

impl FlipAxis {
    pub fn swapped(self) -> FlipAxis {
        match self {
            FlipAxis::Horizontal => FlipAxis::Vertical,
            FlipAxis::Vertical => FlipAxis::Horizontal,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Transform
// ═══════════════════════════════════════════════════════════════════════════

/// Flip and rotation state of a part instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    pub x_flipped: bool,
    pub y_flipped: bool,
    pub rotation: Rotation,
}

impl Transform {
    pub fn new(x_flipped: bool, y_flipped: bool, rotation: Rotation) -> Self {
        Self { x_flipped, y_flipped, rotation }
    }

    /// Flip along a screen axis.
    ///
    /// At 90°/270° the screen axes map onto the opposite local axes, so the
    /// requested axis is swapped before toggling. Returns the local axis that
    /// was toggled; toggling that same local axis again undoes the flip.
    pub fn flip(&mut self, screen_axis: FlipAxis) -> FlipAxis {
        let local = if self.rotation.is_quarter_turn() { screen_axis.swapped() } else { screen_axis };
        self.toggle_local(local);
        local
    }

    /// Toggle a local flip flag without axis remapping
    pub fn toggle_local(&mut self, local_axis: FlipAxis) {
        match local_axis {
            FlipAxis::Horizontal => self.x_flipped = !self.x_flipped,
            FlipAxis::Vertical => self.y_flipped = !self.y_flipped,
        }
    }

    /// Map a local footprint offset into grid space (flip, then rotate)
    pub fn apply(&self, local: Cell) -> Cell {
        let flipped = Cell::new(
            if self.x_flipped { -local.x } else { local.x },
            if self.y_flipped { -local.y } else { local.y },
        );
        self.rotation.apply(flipped)
    }
}

/// Resolve the absolute cells a footprint occupies.
///
/// Cells come out in canonical order: outer loop over `y`, inner over `x`.
/// The last cell of that order is the one recorded as a part's placement cell.
pub fn resolve_cells(footprint: &Footprint, transform: &Transform, center: Cell) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(footprint.enabled_count());
    for y in 0..Footprint::SIZE {
        for x in 0..Footprint::SIZE {
            if !footprint.segment(x, y).is_enabled() {
                continue;
            }
            let local = Cell::new(x as i32 - 1, 1 - y as i32);
            cells.push(center + transform.apply(local));
        }
    }
    cells
}
