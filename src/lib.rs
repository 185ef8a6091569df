//! # N-Puzzle Solver Library
//!
//! This library solves the N×N sliding-tile puzzle (8-puzzle, 15-puzzle, ...)
//! with breadth-first search or A* search guided by one of two admissible
//! heuristics.
//!
//! It is used by two binaries:
//! - `npuzzle`: Loads a puzzle file, solves it with the chosen algorithm and
//!   prints every step of the solution followed by efficiency metrics.
//! - `heuristic_evaluator`: Runs every algorithm over a batch of reproducible
//!   scrambled puzzles and compares how much work each one does.
//!
//! ## Modules
//! - `engine`: The puzzle state (`State`), slide directions (`Direction`), move
//!   legality, the goal configuration and seeded scrambling.
//! - `node`: Search tree nodes (`Node`) and successor generation.
//! - `heuristics`: Manhattan distance and misplaced-tiles estimates.
//! - `frontier`: The `Frontier` trait with FIFO and priority implementations.
//! - `solver`: The generic search loop (`search`) and the `solve` entry point.
//! - `utils`: Parsing puzzles from text and files.
//! - `error`: The `PuzzleError` type.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

pub use engine::{Direction, State};
pub use error::{PuzzleError, PuzzleResult};
pub use solver::{solve, SearchConfig, SearchOutcome, Strategy};
