//! Binary-tree carving.

use crate::carver::{Carver, MazeRng};
use mazegen_core::Direction;
use mazegen_grid::Maze;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;

/// For each open cell in row-major order, open east or south.
///
/// The choice is uniform among the candidates that are in bounds and not
/// blocked. Cells with neither candidate carve nothing, so blocked cells
/// can leave the result split into several components; the connectivity
/// pass joins them afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryTree;

impl Carver for BinaryTree {
    fn name(&self) -> &'static str {
        "binary_tree"
    }

    fn carve(&self, maze: &mut Maze, rng: &mut MazeRng) -> usize {
        let cells: Vec<_> = maze.open_cells().collect();
        let mut carved = 0;
        for cell in cells {
            let options: SmallVec<[Direction; 2]> = [Direction::East, Direction::South]
                .into_iter()
                .filter(|&d| maze.is_open_cell(cell.step(d)))
                .collect();
            if let Some(&dir) = options.choose(rng) {
                maze.carve(cell, dir);
                carved += 1;
            }
        }
        carved
    }
}
