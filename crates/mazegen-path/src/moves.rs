//! Move strings: one direction letter per step.

use mazegen_core::{Coord, Direction, MoveError};
use mazegen_grid::Maze;

/// Encode consecutive steps of `cells` as `N`, `E`, `S`, `W` letters.
///
/// A one-cell (or empty) sequence gives an empty string.
///
/// # Panics
///
/// Panics if two consecutive cells are not one orthogonal step apart.
/// Paths produced by the searches in this crate never do that; anything
/// else is a bug in the caller.
pub fn path_to_moves(cells: &[Coord]) -> String {
    cells
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            match a.direction_to(b) {
                Some(dir) => dir.letter(),
                None => panic!("path step ({a}) -> ({b}) is not a unit orthogonal move"),
            }
        })
        .collect()
}

/// Follow `moves` from `start` ignoring walls and bounds; return the
/// final cell.
pub fn replay_moves(start: Coord, moves: &str) -> Result<Coord, MoveError> {
    moves
        .chars()
        .enumerate()
        .try_fold(start, |at, (index, letter)| {
            Direction::from_letter(letter)
                .map(|dir| at.step(dir))
                .ok_or(MoveError::InvalidLetter { index, letter })
        })
}

/// Follow `moves` from `start` through open passages of `maze`.
///
/// Fails at the first move that leaves the grid or crosses a wall.
pub fn walk_moves(maze: &Maze, start: Coord, moves: &str) -> Result<Coord, MoveError> {
    let mut at = start;
    for (index, letter) in moves.chars().enumerate() {
        let direction =
            Direction::from_letter(letter).ok_or(MoveError::InvalidLetter { index, letter })?;
        if !maze.in_bounds(at.step(direction)) {
            return Err(MoveError::OutOfBounds {
                index,
                from: at,
                direction,
            });
        }
        if !maze.is_passable(at, direction) {
            return Err(MoveError::WallCrossed {
                index,
                from: at,
                direction,
            });
        }
        at = at.step(direction);
    }
    Ok(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegen_test_utils::fixtures;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn encodes_each_direction() {
        let cells = [c(1, 1), c(1, 0), c(2, 0), c(2, 1), c(1, 1)];
        assert_eq!(path_to_moves(&cells), "NESW");
        assert_eq!(path_to_moves(&[c(3, 3)]), "");
        assert_eq!(path_to_moves(&[]), "");
    }

    #[test]
    #[should_panic(expected = "not a unit orthogonal move")]
    fn diagonal_step_panics() {
        path_to_moves(&[c(0, 0), c(1, 1)]);
    }

    #[test]
    #[should_panic(expected = "not a unit orthogonal move")]
    fn repeated_cell_panics() {
        path_to_moves(&[c(0, 0), c(0, 0)]);
    }

    #[test]
    fn replay_lands_on_end() {
        assert_eq!(replay_moves(c(0, 0), "EESSW"), Ok(c(1, 2)));
        assert_eq!(replay_moves(c(4, 4), ""), Ok(c(4, 4)));
    }

    #[test]
    fn replay_rejects_bad_letter() {
        assert_eq!(
            replay_moves(c(0, 0), "ENx"),
            Err(MoveError::InvalidLetter {
                index: 2,
                letter: 'x'
            })
        );
    }

    #[test]
    fn walk_respects_walls_and_bounds() {
        let m = fixtures::serpentine(3, 2);
        assert_eq!(walk_moves(&m, c(0, 0), "EESWW"), Ok(c(0, 1)));
        assert_eq!(
            walk_moves(&m, c(0, 0), "S"),
            Err(MoveError::WallCrossed {
                index: 0,
                from: c(0, 0),
                direction: Direction::South
            })
        );
        assert_eq!(
            walk_moves(&m, c(0, 0), "EN"),
            Err(MoveError::OutOfBounds {
                index: 1,
                from: c(1, 0),
                direction: Direction::North
            })
        );
    }
}
