//! Randomized Prim's algorithm.

use crate::carver::{Carver, MazeRng};
use crate::grid_helpers::{unvisited_neighbours, Visited};
use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;
use rand::Rng;

/// Prim-style carving over a frontier of candidate walls.
///
/// The frontier holds `(visited cell, direction)` edges pointing at cells
/// that were unvisited when the edge was added. Each iteration removes one
/// edge uniformly at random; if its far cell is still unvisited the wall
/// is carved and that cell's own edges join the frontier. Dead ends come
/// out shorter and more numerous than with [`DepthFirst`](crate::DepthFirst).
#[derive(Clone, Copy, Debug, Default)]
pub struct Prim;

impl Prim {
    fn extend_frontier(
        maze: &Maze,
        visited: &Visited,
        cell: Coord,
        frontier: &mut Vec<(Coord, Direction)>,
    ) {
        for (dir, _) in unvisited_neighbours(maze, visited, cell) {
            frontier.push((cell, dir));
        }
    }
}

impl Carver for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn carve(&self, maze: &mut Maze, rng: &mut MazeRng) -> usize {
        let Some(start) = maze.first_open_cell() else {
            return 0;
        };
        let mut visited = Visited::new(maze);
        visited.mark(maze, start);
        let mut frontier = Vec::new();
        Self::extend_frontier(maze, &visited, start, &mut frontier);
        let mut carved = 0;

        while !frontier.is_empty() {
            let pick = rng.random_range(0..frontier.len());
            let (cell, dir) = frontier.swap_remove(pick);
            let nb = cell.step(dir);
            if visited.contains(maze, nb) {
                continue;
            }
            maze.carve(cell, dir);
            visited.mark(maze, nb);
            carved += 1;
            Self::extend_frontier(maze, &visited, nb, &mut frontier);
        }
        carved
    }
}
