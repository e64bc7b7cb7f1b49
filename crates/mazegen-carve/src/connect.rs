//! Connectivity repair.
//!
//! After a carver runs, some open cells may be unreachable from others:
//! binary-tree carving leaves one tree per candidate-less cell, and the
//! spanning carvers only cover the region around their start cell. The
//! sweep here merges every such component with a randomized Kruskal pass
//! over the remaining walls.

use crate::carver::MazeRng;
use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;
use rand::seq::SliceRandom;

/// Union-find over flat cell indices with path halving and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Representative of the set holding `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`. Returns `false` if they were
    /// already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets, including any never-used indices.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

/// Join every component of open cells that some wall still separates.
///
/// Open cells sharing an open passage start in one set. All walled pairs
/// of adjacent open cells are then shuffled and each pair whose ends lie
/// in different sets is carved. Returns the number of walls removed.
///
/// Afterwards every group of open cells that is connected through
/// non-blocked adjacency forms a single component. Running it again
/// carves nothing.
pub fn ensure_connected(maze: &mut Maze, rng: &mut MazeRng) -> usize {
    let mut sets = DisjointSet::new(maze.cell_count());
    let mut walled: Vec<(Coord, Direction)> = Vec::new();

    let cells: Vec<Coord> = maze.open_cells().collect();
    for &cell in &cells {
        for dir in [Direction::East, Direction::South] {
            let nb = cell.step(dir);
            if !maze.is_open_cell(nb) {
                continue;
            }
            if maze.has_wall(cell, dir) {
                walled.push((cell, dir));
            } else if let (Some(a), Some(b)) = (maze.index_of(cell), maze.index_of(nb)) {
                sets.union(a, b);
            }
        }
    }

    walled.shuffle(rng);
    let mut carved = 0;
    for (cell, dir) in walled {
        let (Some(a), Some(b)) = (maze.index_of(cell), maze.index_of(cell.step(dir))) else {
            continue;
        };
        if sets.union(a, b) {
            maze.carve(cell, dir);
            carved += 1;
        }
    }
    if carved > 0 {
        log::debug!("connectivity repair opened {carved} walls");
    }
    carved
}
