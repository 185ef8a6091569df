//! Admissible heuristics for best-first search.
//!
//! Both functions are pure and independent of any search node: they take a
//! state, the goal to measure against, and the grid side length. Neither
//! scores the blank, so both are 0 exactly at the goal and never overestimate
//! the number of moves still needed.
use crate::engine::{State, BLANK};

/// Signature shared by every heuristic: `(state, goal, size) -> estimate`.
pub type HeuristicFn = fn(&State, &State, usize) -> u32;

/// Calculates the sum of Manhattan distances of every tile from its goal
/// position.
///
/// For each non-blank tile this adds `|row - goal_row| + |col - goal_col|`,
/// where `row = index / size` and `col = index % size`. Every move shifts
/// exactly one tile by one cell, so the sum is a lower bound on the moves left.
///
/// # Arguments
/// * `state`: The configuration to score.
/// * `goal`: The configuration to measure against.
/// * `size`: The side length of the grid.
///
/// # Returns
/// The total distance as a `u32`.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::State;
/// use npuzzle_solver::heuristics::manhattan_distance;
///
/// let goal = State::goal(3);
/// let state = State::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
/// // Tiles 1 and 2 are each one column away from home.
/// assert_eq!(manhattan_distance(&state, &goal, 3), 2);
/// ```
pub fn manhattan_distance(state: &State, goal: &State, size: usize) -> u32 {
    // The canonical goal holds tile `t` at index `t`; only other goals need a lookup table.
    let goal_positions = if goal.is_goal() {
        None
    } else {
        Some(positions(goal))
    };
    let mut distance = 0;

    for (idx, &tile) in state.tiles().iter().enumerate() {
        if tile == BLANK {
            continue;
        }
        let goal_idx = match &goal_positions {
            Some(positions) => positions[usize::from(tile)],
            None => usize::from(tile),
        };
        let (row, col) = (idx / size, idx % size);
        let (goal_row, goal_col) = (goal_idx / size, goal_idx % size);
        distance += row.abs_diff(goal_row) + col.abs_diff(goal_col);
    }

    distance as u32
}

/// Counts the non-blank tiles that are not on their goal index.
///
/// # Arguments
/// * `state`: The configuration to score.
/// * `goal`: The configuration to measure against.
/// * `_size`: The side length of the grid (unused; kept so every heuristic
///   shares [`HeuristicFn`]).
///
/// # Returns
/// The number of misplaced tiles as a `u32`.
pub fn misplaced_tiles(state: &State, goal: &State, _size: usize) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&tile, &goal_tile)| tile != BLANK && tile != goal_tile)
        .count() as u32
}

// Index of every tile value in `state`.
fn positions(state: &State) -> Vec<usize> {
    let mut positions = vec![0; state.tiles().len()];
    for (idx, &tile) in state.tiles().iter().enumerate() {
        positions[usize::from(tile)] = idx;
    }
    positions
}
