//! Error types for the sandbox.

use thiserror::Error;

use crate::coords::GridCoord;

/// Workspace-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A block already occupies the target cell
    #[error("Cell {0:?} is already occupied")]
    OccupiedCell(GridCoord),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
