//! Breadth-first search.

use crate::{endpoints, rebuild};
use mazegen_core::{Coord, Path};
use mazegen_grid::Maze;
use std::collections::VecDeque;

const UNSEEN: usize = usize::MAX;

/// Shortest path from `start` to `end` by level-order search.
///
/// Each cell is enqueued at most once. Returns `None` when either endpoint
/// is out of bounds or blocked, or when `end` is unreachable. A start equal
/// to the end gives a one-cell path.
pub fn bfs(maze: &Maze, start: Coord, end: Coord) -> Option<Path> {
    let (s, e) = endpoints(maze, start, end)?;
    let mut parent = vec![UNSEEN; maze.cell_count()];
    let mut queue = VecDeque::new();
    parent[s] = s;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == end {
            return rebuild(maze, &parent, e);
        }
        let Some(here) = maze.index_of(cell) else {
            continue;
        };
        for (_, nb) in maze.passable_neighbours(cell) {
            let Some(i) = maze.index_of(nb) else {
                continue;
            };
            if parent[i] == UNSEEN {
                parent[i] = here;
                queue.push_back(nb);
            }
        }
    }
    None
}

/// Number of steps on a shortest path, or `None` when there is none.
pub fn shortest_path_len(maze: &Maze, start: Coord, end: Coord) -> Option<usize> {
    bfs(maze, start, end).map(|p| p.step_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegen_test_utils::{assert_valid_path, fixtures};

    #[test]
    fn serpentine_path_visits_every_cell() {
        let m = fixtures::serpentine(5, 4);
        let (s, e) = (Coord::new(0, 0), Coord::new(0, 3));
        let p = bfs(&m, s, e).unwrap();
        assert_eq!(p.len(), 20);
        assert_valid_path(&m, p.cells(), s, e);
    }

    #[test]
    fn open_room_path_is_manhattan() {
        let m = fixtures::open_room(6, 6);
        let (s, e) = (Coord::new(1, 0), Coord::new(5, 4));
        assert_eq!(shortest_path_len(&m, s, e), Some(8));
    }

    #[test]
    fn start_equals_end() {
        let m = fixtures::comb(3, 3);
        let p = bfs(&m, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.step_count(), 0);
    }

    #[test]
    fn no_path_cases() {
        let m = fixtures::split_room(5, 3);
        // Out of bounds, blocked, and cut off.
        assert!(bfs(&m, Coord::new(-1, 0), Coord::new(0, 0)).is_none());
        assert!(bfs(&m, Coord::new(0, 0), Coord::new(2, 1)).is_none());
        assert!(bfs(&m, Coord::new(0, 0), Coord::new(4, 2)).is_none());
        assert!(bfs(&Maze::new(3, 3), Coord::new(0, 0), Coord::new(2, 2)).is_none());
    }
}
