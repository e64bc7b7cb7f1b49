//! Hunt-and-kill.

use crate::carver::{Carver, MazeRng};
use crate::grid_helpers::{unvisited_neighbours, Visited};
use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;

/// Random walk until stuck, then hunt for a fresh start.
///
/// The walk carves into a random unvisited neighbour each step. When the
/// walker has nowhere to go, a row-major scan finds the first unvisited
/// open cell bordering the visited region; one wall toward a visited
/// neighbour is opened and the walk resumes from there. Carving ends when
/// the scan finds nothing.
///
/// Cells never become unvisited again, so each scan starts at the first
/// row that still holds an unvisited open cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuntAndKill;

impl HuntAndKill {
    /// First unvisited cell with a visited neighbour, and the direction
    /// toward one such neighbour.
    ///
    /// Scanning starts at row `*first_row`, which is advanced past every
    /// leading row found to be fully visited.
    fn hunt(
        maze: &Maze,
        visited: &Visited,
        first_row: &mut u32,
        rng: &mut MazeRng,
    ) -> Option<(Coord, Direction)> {
        let mut settled = true;
        for y in *first_row..maze.height() {
            let mut row_settled = true;
            for x in 0..maze.width() {
                let cell = Coord::new(x as i32, y as i32);
                if maze.is_blocked(cell) || visited.contains(maze, cell) {
                    continue;
                }
                row_settled = false;
                let links: SmallVec<[Direction; 4]> = maze
                    .carvable_neighbours(cell)
                    .into_iter()
                    .filter(|&(_, nb)| visited.contains(maze, nb))
                    .map(|(d, _)| d)
                    .collect();
                if let Some(&dir) = links.choose(rng) {
                    return Some((cell, dir));
                }
            }
            settled &= row_settled;
            if settled {
                *first_row = y + 1;
            }
        }
        None
    }
}

impl Carver for HuntAndKill {
    fn name(&self) -> &'static str {
        "hunt"
    }

    fn carve(&self, maze: &mut Maze, rng: &mut MazeRng) -> usize {
        let Some(start) = maze.first_open_cell() else {
            return 0;
        };
        let mut visited = Visited::new(maze);
        visited.mark(maze, start);
        let mut current = start;
        let mut carved = 0;
        let mut first_row = 0;

        loop {
            let options = unvisited_neighbours(maze, &visited, current);
            if let Some(&(dir, nb)) = options.choose(rng) {
                maze.carve(current, dir);
                visited.mark(maze, nb);
                carved += 1;
                current = nb;
                continue;
            }
            match Self::hunt(maze, &visited, &mut first_row, rng) {
                Some((cell, dir)) => {
                    maze.carve(cell, dir);
                    visited.mark(maze, cell);
                    carved += 1;
                    current = cell;
                }
                None => break,
            }
        }
        carved
    }
}
