//! Benchmark profiles for mazegen.
//!
//! - [`reference_profile`]: 100x75 decorated maze, the size the benches
//!   compare algorithms at
//! - [`stress_profile`]: 1000x1000 undecorated maze (one million cells)
//! - [`carved_maze`]: a ready-carved grid for search and codec benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazegen_carve::{carve_all, seeded_rng, Algorithm, DEFAULT_LOOP_PROBABILITY};
use mazegen_core::{Coord, PlacementError};
use mazegen_engine::MazeConfig;
use mazegen_grid::{place_pattern, Maze, Pattern};

/// 100x75 decorated maze, corner to corner.
pub fn reference_profile(algorithm: Algorithm, seed: u64) -> MazeConfig {
    let mut config = MazeConfig::new(100, 75, Coord::new(0, 0), Coord::new(99, 74));
    config.algorithm = algorithm;
    config.seed = Some(seed);
    config
}

/// 1000x1000 undecorated imperfect maze.
pub fn stress_profile(algorithm: Algorithm, seed: u64) -> MazeConfig {
    let mut config = MazeConfig::new(1000, 1000, Coord::new(0, 0), Coord::new(999, 999));
    config.algorithm = algorithm;
    config.seed = Some(seed);
    config.perfect = false;
    config.decorate = false;
    config
}

/// A decorated, carved maze with loops, for search and codec benches.
///
/// Grids smaller than the pattern are carved undecorated.
pub fn carved_maze(width: u32, height: u32, algorithm: Algorithm, seed: u64) -> Maze {
    let mut maze = Maze::new(width, height);
    match place_pattern(&mut maze, &Pattern::forty_two()) {
        Ok(_) => {}
        Err(PlacementError::DoesNotFit { .. }) => {}
    }
    carve_all(
        &mut maze,
        algorithm,
        &mut seeded_rng(seed),
        false,
        DEFAULT_LOOP_PROBABILITY,
    );
    maze
}
