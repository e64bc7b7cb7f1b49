//! The carve, repair and loop sequence as one call.

use crate::carver::{Algorithm, MazeRng};
use crate::connect::ensure_connected;
use crate::loops::inject_loops;
use mazegen_grid::Maze;

/// Walls removed by each stage of [`carve_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Walls opened by the selected algorithm.
    pub carved: usize,
    /// Walls opened by the connectivity repair.
    pub repaired: usize,
    /// Walls opened by loop injection (zero for perfect mazes).
    pub loops: usize,
}

impl CarveStats {
    /// Total walls removed.
    pub fn total(&self) -> usize {
        self.carved + self.repaired + self.loops
    }
}

/// Run `algorithm`, then connectivity repair, then (unless `perfect`)
/// loop injection with `loop_probability`.
///
/// `maze` should be fully walled apart from its blocked cells.
pub fn carve_all(
    maze: &mut Maze,
    algorithm: Algorithm,
    rng: &mut MazeRng,
    perfect: bool,
    loop_probability: f64,
) -> CarveStats {
    let carved = algorithm.carver().carve(maze, rng);
    log::debug!("{algorithm} opened {carved} walls");
    let repaired = ensure_connected(maze, rng);
    let loops = if perfect {
        0
    } else {
        inject_loops(maze, rng, loop_probability)
    };
    CarveStats {
        carved,
        repaired,
        loops,
    }
}
