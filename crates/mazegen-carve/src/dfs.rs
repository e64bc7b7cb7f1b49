//! Randomized depth-first backtracker.

use crate::carver::{Carver, MazeRng};
use crate::grid_helpers::Visited;
use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;
use rand::seq::SliceRandom;

/// Depth-first carving with an explicit stack.
///
/// Starts at the first open cell. Each step shuffles the four directions
/// and advances into the first unvisited open neighbour; a cell with no
/// such neighbour is popped. The result is a spanning tree over the
/// region reachable from the start, with long winding corridors.
///
/// The stack lives on the heap, so grid size is bounded by memory rather
/// than by call depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl Carver for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn carve(&self, maze: &mut Maze, rng: &mut MazeRng) -> usize {
        let Some(start) = maze.first_open_cell() else {
            return 0;
        };
        let mut visited = Visited::new(maze);
        let mut stack: Vec<Coord> = vec![start];
        visited.mark(maze, start);
        let mut carved = 0;

        while let Some(&current) = stack.last() {
            let mut dirs = Direction::ALL;
            dirs.shuffle(rng);
            let next = dirs.into_iter().find(|&d| {
                let nb = current.step(d);
                maze.is_open_cell(nb) && !visited.contains(maze, nb)
            });
            match next {
                Some(dir) => {
                    let nb = current.step(dir);
                    maze.carve(current, dir);
                    visited.mark(maze, nb);
                    stack.push(nb);
                    carved += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }
        carved
    }
}
