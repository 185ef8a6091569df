use crate::engine::{State, BLANK};
use crate::error::{PuzzleError, PuzzleResult};
use std::fs;
use std::path::Path;

/// Parses a puzzle from its text form into a `State`.
///
/// Each non-empty line is one row of the grid, with tiles separated by spaces.
/// The blank is written as `.` (a literal `0` is accepted too). The grid size
/// is the number of rows, and every row must hold exactly that many tiles.
///
/// # Arguments
/// * `text`: The puzzle text, one row per line.
///
/// # Returns
/// * `Ok(State)` if parsing is successful.
/// * `Err(PuzzleError)` if:
///     - There are no rows.
///     - A row has the wrong number of tiles.
///     - A token is neither `.` nor a number.
///     - The tiles are not a permutation of `0..size²` (see [`State::new`]).
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::parse_puzzle;
///
/// let state = parse_puzzle("1 2 .\n3 4 5\n6 7 8\n").unwrap();
/// assert_eq!(state.size(), 3);
/// assert_eq!(state.tiles(), &[1, 2, 0, 3, 4, 5, 6, 7, 8]);
///
/// assert!(parse_puzzle("1 2\n3 x").is_err());
/// assert!(parse_puzzle("1 2 .\n3 4").is_err());
/// ```
pub fn parse_puzzle(text: &str) -> PuzzleResult<State> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(PuzzleError::Empty);
    }

    let size = rows.len();
    let mut tiles = Vec::with_capacity(size * size);

    for (r, row) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != size {
            return Err(PuzzleError::RowLength {
                row: r,
                expected: size,
                found: tokens.len(),
            });
        }

        for (c, token) in tokens.into_iter().enumerate() {
            let tile = if token == "." {
                BLANK
            } else {
                token.parse::<u16>().map_err(|_| PuzzleError::InvalidToken {
                    row: r,
                    col: c,
                    token: token.to_string(),
                })?
            };
            tiles.push(tile);
        }
    }

    State::new(tiles)
}

/// Reads and parses a puzzle file.
///
/// # Errors
/// Returns [`PuzzleError::Io`] if the file cannot be read, or any error from
/// [`parse_puzzle`].
pub fn read_puzzle_file(path: &Path) -> PuzzleResult<State> {
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_puzzle_valid() {
        let state = parse_puzzle("1 2 3\n4 . 5\n6 7 8").unwrap();
        assert_eq!(state.size(), 3);
        assert_eq!(state.blank_index(), 4);
        assert_eq!(state.tiles(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_puzzle_tolerates_blank_lines_and_extra_spaces() {
        let state = parse_puzzle("\n  1   .\n\n3 2  \n\n").unwrap();
        assert_eq!(state.tiles(), &[1, 0, 3, 2]);
    }

    #[test]
    fn test_parse_puzzle_accepts_zero_as_blank() {
        let state = parse_puzzle("0 1\n2 3").unwrap();
        assert!(state.is_goal());
    }

    #[test]
    fn test_parse_puzzle_invalid_token() {
        let err = parse_puzzle("1 2 3\n4 X 5\n6 7 .").unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidToken { row: 1, col: 1, .. }));
        assert!(err.to_string().contains("Unrecognized tile 'X'"));

        assert!(matches!(
            parse_puzzle("1 -2\n. 3").unwrap_err(),
            PuzzleError::InvalidToken { row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn test_parse_puzzle_wrong_row_length() {
        let err = parse_puzzle("1 2 3\n4 . 5 9\n6 7 8").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RowLength {
                row: 1,
                expected: 3,
                found: 4
            }
        ));

        // Three rows of two tiles is not a 3x3 grid.
        assert!(matches!(
            parse_puzzle("1 2\n3 .\n4 5").unwrap_err(),
            PuzzleError::RowLength { row: 0, .. }
        ));
    }

    #[test]
    fn test_parse_puzzle_missing_blank_and_duplicates() {
        assert!(matches!(
            parse_puzzle("1 2\n3 3").unwrap_err(),
            PuzzleError::MissingBlank
        ));
        assert!(matches!(
            parse_puzzle(". 2\n2 1").unwrap_err(),
            PuzzleError::DuplicateTile { tile: 2 }
        ));
        assert!(matches!(
            parse_puzzle(". 1\n2 4").unwrap_err(),
            PuzzleError::TileOutOfRange { tile: 4, size: 2 }
        ));
    }

    #[test]
    fn test_parse_puzzle_empty_input() {
        assert!(matches!(parse_puzzle("").unwrap_err(), PuzzleError::Empty));
        assert!(matches!(parse_puzzle("\n  \n").unwrap_err(), PuzzleError::Empty));
    }

    #[test]
    fn test_display_output_parses_back() {
        for seed in 0..5 {
            let state = State::scrambled(4, 40, seed);
            assert_eq!(parse_puzzle(&state.to_string()).unwrap(), state);
        }
    }

    #[test]
    fn test_read_puzzle_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 5").unwrap();
        writeln!(file, "3 4 .").unwrap();
        writeln!(file, "6 7 8").unwrap();

        let state = read_puzzle_file(file.path()).unwrap();
        assert_eq!(state.tiles(), &[1, 2, 5, 3, 4, 0, 6, 7, 8]);
    }

    #[test]
    fn test_read_puzzle_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_puzzle_file(&path).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
