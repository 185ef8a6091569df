//! Error types for the puzzle loader and state model.
//!
//! The search engine itself never fails: an exhausted node budget is reported
//! through `SearchOutcome::possible`. Everything that can go wrong before a
//! search starts (reading a file, malformed tiles, an unknown strategy name)
//! is a `PuzzleError`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a puzzle or selecting a strategy.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The puzzle file could not be read.
    #[error("Failed to read puzzle file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained no rows.
    #[error("Puzzle is empty")]
    Empty,

    /// A row does not have one tile per column.
    #[error("Row {row} has {found} tiles (expected {expected})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A token is neither `.` nor a tile number.
    #[error("Unrecognized tile '{token}' in row {row} col {col}")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },

    /// The number of tiles is not a perfect square.
    #[error("{len} tiles do not form a square grid")]
    NotSquare { len: usize },

    /// The grid has more cells than a tile label can address.
    #[error("Puzzle size {size} is too large")]
    TooLarge { size: usize },

    /// No blank tile in the grid.
    #[error("Puzzle has no blank tile")]
    MissingBlank,

    /// A tile value does not fit the grid.
    #[error("Tile {tile} is out of range for a {size}x{size} puzzle")]
    TileOutOfRange { tile: u16, size: usize },

    /// A tile value (or the blank) appears more than once.
    #[error("Tile {tile} appears more than once")]
    DuplicateTile { tile: u16 },

    /// The requested search strategy does not exist.
    #[error("Invalid search method '{0}' (expected one of: bfs, astar_manhattan, astar_misplaced)")]
    UnknownStrategy(String),
}

/// Result type alias for puzzle operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;
