//! Structural queries over a carved maze.
//!
//! None of these mutate the grid. They back the perfect/imperfect
//! property checks and the numbers in a generation report.

use crate::maze::Maze;
use mazegen_core::{Coord, Direction};

/// Number of open passages between pairs of non-blocked cells.
///
/// Each passage is counted once, from its west or north end.
pub fn open_passage_count(maze: &Maze) -> usize {
    maze.open_cells()
        .map(|c| {
            usize::from(maze.is_passable(c, Direction::East))
                + usize::from(maze.is_passable(c, Direction::South))
        })
        .sum()
}

/// A perfect maze is a spanning tree: exactly `open cells - 1` passages
/// and a single component.
///
/// A grid with no open cells is not perfect.
pub fn is_perfect(maze: &Maze) -> bool {
    let open = maze.open_cell_count();
    open > 0 && open_passage_count(maze) == open - 1 && component_count(maze) == 1
}

/// Number of connected components among non-blocked cells.
pub fn component_count(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.cell_count()];
    let mut stack: Vec<Coord> = Vec::new();
    let mut components = 0;

    for start in maze.open_cells() {
        let Some(i) = maze.index_of(start) else {
            continue;
        };
        if seen[i] {
            continue;
        }
        components += 1;
        seen[i] = true;
        stack.push(start);
        while let Some(cell) = stack.pop() {
            for (_, nb) in maze.passable_neighbours(cell) {
                if let Some(j) = maze.index_of(nb) {
                    if !seen[j] {
                        seen[j] = true;
                        stack.push(nb);
                    }
                }
            }
        }
    }
    components
}

/// Whether some `k x k` block of non-blocked cells has every internal
/// wall open.
///
/// `k < 2` is always `false`: a single cell is not an area.
pub fn has_open_area(maze: &Maze, k: u32) -> bool {
    if k < 2 || k > maze.width() || k > maze.height() {
        return false;
    }
    let k = k as i32;
    let (w, h) = (maze.width() as i32, maze.height() as i32);
    for oy in 0..=h - k {
        for ox in 0..=w - k {
            if block_is_open(maze, ox, oy, k) {
                return true;
            }
        }
    }
    false
}

fn block_is_open(maze: &Maze, ox: i32, oy: i32, k: i32) -> bool {
    for y in oy..oy + k {
        for x in ox..ox + k {
            let c = Coord::new(x, y);
            if maze.is_blocked(c) {
                return false;
            }
            if x + 1 < ox + k && !maze.is_passable(c, Direction::East) {
                return false;
            }
            if y + 1 < oy + k && !maze.is_passable(c, Direction::South) {
                return false;
            }
        }
    }
    true
}

/// Whether the wall masks are mutually consistent.
///
/// Checks that every shared wall agrees on both sides, that the outer
/// boundary is closed, and that blocked cells are fully closed.
pub fn is_wall_coherent(maze: &Maze) -> bool {
    maze.coords().all(|c| {
        let Some(mask) = maze.wall_mask(c) else {
            return false;
        };
        if maze.is_blocked(c) && mask != mazegen_core::WallMask::ALL {
            return false;
        }
        Direction::ALL.into_iter().all(|d| {
            let nb = c.step(d);
            match maze.wall_mask(nb) {
                None => mask.has(d),
                Some(other) => mask.has(d) == other.has(d.opposite()),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegen_core::WallMask;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn serpentine(w: u32, h: u32) -> Maze {
        let mut m = Maze::new(w, h);
        for y in 0..h as i32 {
            for x in 0..w as i32 - 1 {
                m.carve(c(x, y), Direction::East);
            }
            if y + 1 < h as i32 {
                let x = if y % 2 == 0 { w as i32 - 1 } else { 0 };
                m.carve(c(x, y), Direction::South);
            }
        }
        m
    }

    #[test]
    fn walled_grid_has_no_passages() {
        let m = Maze::new(4, 4);
        assert_eq!(open_passage_count(&m), 0);
        assert_eq!(component_count(&m), 16);
        assert!(!is_perfect(&m));
    }

    #[test]
    fn single_cell_is_perfect() {
        assert!(is_perfect(&Maze::new(1, 1)));
    }

    #[test]
    fn serpentine_is_perfect() {
        let m = serpentine(5, 4);
        assert_eq!(open_passage_count(&m), 19);
        assert_eq!(component_count(&m), 1);
        assert!(is_perfect(&m));
        assert!(is_wall_coherent(&m));
    }

    #[test]
    fn extra_passage_breaks_perfection() {
        let mut m = serpentine(4, 3);
        m.carve(c(1, 0), Direction::South);
        assert_eq!(open_passage_count(&m), 12);
        assert!(!is_perfect(&m));
        assert!(has_open_area(&m, 2));
    }

    #[test]
    fn open_area_requires_internal_walls_open() {
        let m = serpentine(4, 4);
        assert!(!has_open_area(&m, 2));
        assert!(!has_open_area(&m, 1));
        assert!(!has_open_area(&m, 9));

        let mut room = Maze::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                if x < 2 {
                    room.carve(c(x, y), Direction::East);
                }
                if y < 2 {
                    room.carve(c(x, y), Direction::South);
                }
            }
        }
        assert!(has_open_area(&room, 3));
    }

    #[test]
    fn blocked_cells_split_components() {
        let mut m = serpentine(3, 1);
        m.block(c(1, 0));
        assert_eq!(component_count(&m), 2);
        assert_eq!(open_passage_count(&m), 0);
        assert!(is_wall_coherent(&m));
    }

    #[test]
    fn incoherent_masks_are_detected() {
        let mut masks = vec![WallMask::ALL; 2];
        masks[0].remove(Direction::East);
        let m = Maze::from_wall_masks(2, 1, masks).unwrap();
        assert!(!is_wall_coherent(&m));

        let mut masks = vec![WallMask::ALL; 1];
        masks[0].remove(Direction::North);
        let m = Maze::from_wall_masks(1, 1, masks).unwrap();
        assert!(!is_wall_coherent(&m));
    }
}
