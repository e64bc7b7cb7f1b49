//! Visited-cell bookkeeping shared by the spanning carvers.

use mazegen_core::Coord;
use mazegen_grid::{Maze, Neighbours};

/// Flat visited flags indexed by the maze's row-major cell index.
pub(crate) struct Visited {
    flags: Vec<bool>,
}

impl Visited {
    pub(crate) fn new(maze: &Maze) -> Self {
        Self {
            flags: vec![false; maze.cell_count()],
        }
    }

    pub(crate) fn mark(&mut self, maze: &Maze, coord: Coord) {
        if let Some(i) = maze.index_of(coord) {
            self.flags[i] = true;
        }
    }

    pub(crate) fn contains(&self, maze: &Maze, coord: Coord) -> bool {
        maze.index_of(coord).is_some_and(|i| self.flags[i])
    }
}

/// Carvable neighbours of `coord` not yet visited.
pub(crate) fn unvisited_neighbours(maze: &Maze, visited: &Visited, coord: Coord) -> Neighbours {
    maze.carvable_neighbours(coord)
        .into_iter()
        .filter(|&(_, nb)| !visited.contains(maze, nb))
        .collect()
}
