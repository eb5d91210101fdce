//! Unified error types for shipyard_edit
//!
//! Only loading and persistence can fail. Editing itself never errors:
//! occupied cells, empty inventory slots and empty undo stacks are reported
//! through `bool`/`Option` returns or a rejected command outcome.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shipyard_edit operations
#[derive(Debug, Error)]
pub enum EditorError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    // === Serialization Errors ===
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    // === Catalog Errors ===
    #[error("Duplicate part name '{name}' in catalog")]
    DuplicatePart { name: String },

    #[error("Unknown part '{name}'")]
    UnknownPart { name: String },

    #[error("Part '{name}' has no enabled segment")]
    InvalidFootprint { name: String },

    // === Inventory Errors ===
    #[error("Stock of '{name}' exceeds {max}", max = u32::MAX)]
    StockOverflow { name: String },

    // === Options Errors ===
    #[error("Cell {cell} is outside the addressable grid")]
    CellOutOfRange { cell: crate::Cell },

    // === Transform Errors ===
    #[error("Invalid rotation: {degrees} is not a multiple of 90")]
    InvalidRotation { degrees: i32 },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for shipyard_edit operations
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
