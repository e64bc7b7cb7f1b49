//! Shortest-path search over a carved [`Maze`].
//!
//! Two searches are provided, [`bfs`] and [`astar`]. Both walk the graph
//! whose edges are open passages between non-blocked cells, and both
//! return a shortest [`Path`] or `None`. They always agree on the length;
//! the concrete cells may differ when several shortest routes exist.
//!
//! [`path_to_moves`] turns a path into the `N`/`E`/`S`/`W` string used by
//! the export format, and [`replay_moves`] / [`walk_moves`] go the other
//! way.
//!
//! [`Maze`]: mazegen_grid::Maze
//! [`Path`]: mazegen_core::Path

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod moves;

pub use astar::astar;
pub use bfs::{bfs, shortest_path_len};
pub use moves::{path_to_moves, replay_moves, walk_moves};

use mazegen_core::{Coord, Path};
use mazegen_grid::Maze;
use std::fmt;

/// Which search to use when a caller wants to choose at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathAlgorithm {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// A* with the Manhattan heuristic.
    AStar,
}

impl PathAlgorithm {
    /// Run the selected search.
    pub fn find(self, maze: &Maze, start: Coord, end: Coord) -> Option<Path> {
        match self {
            Self::Bfs => bfs(maze, start, end),
            Self::AStar => astar(maze, start, end),
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "bfs",
            Self::AStar => "astar",
        })
    }
}

/// Walk a parent table back from `end` and build the forward path.
///
/// `parent[i]` holds the flat index of the cell `i` was reached from;
/// the start cell is its own parent.
pub(crate) fn rebuild(maze: &Maze, parent: &[usize], end: usize) -> Option<Path> {
    let mut cells = vec![maze.coord_of(end)];
    let mut at = end;
    while parent[at] != at {
        at = parent[at];
        cells.push(maze.coord_of(at));
    }
    cells.reverse();
    Path::from_cells(cells)
}

/// Flat indices of `start` and `end` when both are open cells.
pub(crate) fn endpoints(maze: &Maze, start: Coord, end: Coord) -> Option<(usize, usize)> {
    if !maze.is_open_cell(start) || !maze.is_open_cell(end) {
        return None;
    }
    Some((maze.index_of(start)?, maze.index_of(end)?))
}
