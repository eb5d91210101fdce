mod error;
pub use error::{EditorError, Result};

mod geometry;
pub use geometry::{resolve_cells, Cell, EdgeState, FlipAxis, Footprint, Rotation, Segment, SegmentState, Transform};

mod part;
pub use part::{PartDefinition, PartId, PartIdAllocator, PartInstance, PartType};

mod catalog;
pub use catalog::Catalog;

mod inventory;
pub use inventory::{Inventory, InventoryEntry};

mod grid;
pub use grid::OccupancyGrid;

mod options;
pub use options::{EditorOptions, GridBounds};

mod presentation;
pub use presentation::{Highlight, NullPresentation, PresentationEvent, PresentationSink, TracePresentation};

mod editor;
pub use editor::{EditorMode, EditorState, GuardFlags, NavigationSnapshot};

pub mod commands;
pub use commands::{EditorCommand, EditorContext, Outcome};

mod history;
pub use history::CommandHistory;

mod routine;
pub use routine::{RestoreStage, Routine, Step};

pub mod input;
pub use input::{InputEvent, RotateDirection, ZoomDirection};

mod snapshot;
pub use snapshot::{EditorSnapshot, ModelSnapshot, PartSnapshot, StockSnapshot};

mod session;
pub use session::{Dispatch, EditorSession};
