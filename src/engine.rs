//! State model for the N×N sliding puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four ways the blank can slide.
//! - `State`: An immutable tile configuration with move legality checks,
//!   successor generation, the canonical goal, and seeded scrambling.
use crate::error::{PuzzleError, PuzzleResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The label of the blank tile.
pub const BLANK: u16 = 0;

/// A direction the blank can slide in.
///
/// The blank is never itself "moved" as a tile: sliding it `Left` swaps it with
/// the tile on its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// One configuration of the puzzle.
///
/// Tiles are stored row-major; `0` is the blank. A `State` is immutable: every
/// move produces a new value. Equality and hashing are structural, so two
/// states built independently from the same tiles are the same state.
///
/// The side length and the blank position are cached next to the tiles. Both
/// are derived from the tiles, so they never make two equal tile sequences
/// compare unequal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    tiles: Box<[u16]>,
    size: usize,
    blank: usize,
}

impl State {
    /// Creates a state from row-major tiles, validating that they form a
    /// permutation of `0..size²`.
    ///
    /// # Arguments
    /// * `tiles`: The tile labels, row by row, with `0` as the blank.
    ///
    /// # Returns
    /// * `Ok(State)` if the tiles form a valid square puzzle.
    /// * `Err(PuzzleError)` if the input is empty, not square, has no blank,
    ///   or contains an out-of-range or repeated tile.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::State;
    ///
    /// let state = State::new(vec![1, 0, 2, 3]).unwrap();
    /// assert_eq!(state.size(), 2);
    /// assert_eq!(state.blank_index(), 1);
    ///
    /// assert!(State::new(vec![1, 2, 3]).is_err()); // not square
    /// assert!(State::new(vec![1, 1, 2, 3]).is_err()); // no blank
    /// ```
    pub fn new(tiles: Vec<u16>) -> PuzzleResult<State> {
        let len = tiles.len();
        if len == 0 {
            return Err(PuzzleError::Empty);
        }

        let size = integer_sqrt(len);
        if size * size != len {
            return Err(PuzzleError::NotSquare { len });
        }
        if len > usize::from(u16::MAX) + 1 {
            return Err(PuzzleError::TooLarge { size });
        }

        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(PuzzleError::MissingBlank)?;

        let mut seen = vec![false; len];
        for &tile in &tiles {
            let idx = usize::from(tile);
            if idx >= len {
                return Err(PuzzleError::TileOutOfRange { tile, size });
            }
            if seen[idx] {
                return Err(PuzzleError::DuplicateTile { tile });
            }
            seen[idx] = true;
        }

        Ok(State {
            tiles: tiles.into_boxed_slice(),
            size,
            blank,
        })
    }

    /// Returns the solved configuration `0, 1, 2, ..., size² - 1`.
    ///
    /// # Panics
    /// Panics if `size` is 0 or if `size²` tiles cannot be labelled with a `u16`.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::State;
    /// let goal = State::goal(3);
    /// assert_eq!(goal.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn goal(size: usize) -> State {
        assert!(size > 0, "Puzzle size must be at least 1");
        let len = size * size;
        assert!(len <= usize::from(u16::MAX) + 1, "Puzzle size {} is too large", size);
        State {
            tiles: (0..len).map(|t| t as u16).collect(),
            size,
            blank: 0,
        }
    }

    /// Creates a reproducible, solvable puzzle by sliding the blank `moves`
    /// times from the goal.
    ///
    /// The walk never immediately undoes its previous move, but it can still
    /// revisit earlier states, so the optimal solution may be shorter than
    /// `moves`. The same `(size, moves, seed)` always yields the same state.
    ///
    /// # Arguments
    /// * `size`: The side length of the grid.
    /// * `moves`: The number of random moves to apply.
    /// * `seed`: Seed for the random number generator.
    ///
    /// # Panics
    /// Panics under the same conditions as [`State::goal`].
    pub fn scrambled(size: usize, moves: usize, seed: u64) -> State {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = State::goal(size);
        let mut previous: Option<Direction> = None;

        for _ in 0..moves {
            let options: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| state.can_move(d) && previous != Some(d.opposite()))
                .collect();
            if options.is_empty() {
                break; // 1x1 grid
            }
            let direction = options[rng.gen_range(0..options.len())];
            if let Some(next) = state.apply_move(direction) {
                state = next;
                previous = Some(direction);
            }
        }
        state
    }

    /// Returns the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the index of the blank tile.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns `true` if this is the solved configuration.
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, &t)| usize::from(t) == idx)
    }

    /// Checks whether the blank can slide in `direction`.
    ///
    /// The blank cannot leave the grid: `Left` needs it off column 0, `Right`
    /// off the last column, `Up` off row 0 and `Down` off the last row.
    pub fn can_move(&self, direction: Direction) -> bool {
        let row = self.blank / self.size;
        let col = self.blank % self.size;
        match direction {
            Direction::Left => col != 0,
            Direction::Right => col != self.size - 1,
            Direction::Up => self.blank >= self.size,
            Direction::Down => row < self.size - 1,
        }
    }

    /// Slides the blank in `direction`, returning the resulting state.
    ///
    /// `self` is left untouched.
    ///
    /// # Returns
    /// * `Some(State)` with the blank swapped with its neighbour.
    /// * `None` if the move would take the blank off the grid.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::{Direction, State};
    ///
    /// let goal = State::goal(3);
    /// assert!(goal.apply_move(Direction::Left).is_none());
    ///
    /// let moved = goal.apply_move(Direction::Right).unwrap();
    /// assert_eq!(moved.tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(moved.apply_move(Direction::Left), Some(goal));
    /// ```
    pub fn apply_move(&self, direction: Direction) -> Option<State> {
        if !self.can_move(direction) {
            return None;
        }
        let target = match direction {
            Direction::Left => self.blank - 1,
            Direction::Right => self.blank + 1,
            Direction::Up => self.blank - self.size,
            Direction::Down => self.blank + self.size,
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(State {
            tiles,
            size: self.size,
            blank: target,
        })
    }
}

impl fmt::Display for State {
    /// Renders the grid one row per line, tiles separated by single spaces and
    /// the blank shown as `.`. The output can be read back by
    /// [`crate::utils::parse_puzzle`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Largest `n` with `n * n <= len`.
fn integer_sqrt(len: usize) -> usize {
    let mut n = (len as f64).sqrt() as usize;
    while n * n > len {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    n
}
