//! Loop injection for imperfect mazes.

use crate::carver::MazeRng;
use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Per-cell chance of opening one extra wall.
pub const DEFAULT_LOOP_PROBABILITY: f64 = 0.10;

/// Open extra walls between adjacent open cells.
///
/// Each open cell, in row-major order, rolls against `probability`; on a
/// hit one of its still-walled open neighbours is picked uniformly and the
/// wall between them carved. Only walls are removed, so connectivity is
/// kept.
///
/// If the sweep carves nothing and some walled pair of open cells exists,
/// one such pair is carved anyway, so an imperfect maze always has at
/// least one loop when the grid can hold one. A probability outside
/// `0.0..=1.0` is clamped; NaN behaves as zero.
///
/// Returns the number of walls removed.
pub fn inject_loops(maze: &mut Maze, rng: &mut MazeRng, probability: f64) -> usize {
    let probability = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    let cells: Vec<Coord> = maze.open_cells().collect();
    let mut carved = 0;

    for cell in cells {
        if !rng.random_bool(probability) {
            continue;
        }
        let walled: SmallVec<[Direction; 4]> = maze
            .carvable_neighbours(cell)
            .into_iter()
            .filter(|&(d, _)| maze.has_wall(cell, d))
            .map(|(d, _)| d)
            .collect();
        if let Some(&dir) = walled.choose(rng) {
            maze.carve(cell, dir);
            carved += 1;
        }
    }

    if carved == 0 {
        let walled: Vec<(Coord, Direction)> = maze
            .open_cells()
            .flat_map(|c| [(c, Direction::East), (c, Direction::South)])
            .filter(|&(c, d)| maze.is_open_cell(c.step(d)) && maze.has_wall(c, d))
            .collect();
        if let Some(&(cell, dir)) = walled.choose(rng) {
            maze.carve(cell, dir);
            carved = 1;
        }
    }
    log::debug!("loop injection opened {carved} walls");
    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carver::seeded_rng;
    use crate::{ensure_connected, Carver, DepthFirst};
    use mazegen_grid::analysis;

    fn tree(w: u32, h: u32, seed: u64) -> (Maze, MazeRng) {
        let mut m = Maze::new(w, h);
        let mut rng = seeded_rng(seed);
        DepthFirst.carve(&mut m, &mut rng);
        (m, rng)
    }

    #[test]
    fn adds_passages_and_keeps_connectivity() {
        let (mut m, mut rng) = tree(10, 10, 1);
        let before = analysis::open_passage_count(&m);
        let added = inject_loops(&mut m, &mut rng, DEFAULT_LOOP_PROBABILITY);
        assert!(added >= 1);
        assert_eq!(analysis::open_passage_count(&m), before + added);
        assert_eq!(analysis::component_count(&m), 1);
        assert!(!analysis::is_perfect(&m));
    }

    #[test]
    fn zero_probability_still_opens_one_loop() {
        let (mut m, mut rng) = tree(4, 4, 2);
        assert_eq!(inject_loops(&mut m, &mut rng, 0.0), 1);
        assert_eq!(analysis::open_passage_count(&m), 16);
    }

    #[test]
    fn nan_and_out_of_range_are_tolerated() {
        let (mut m, mut rng) = tree(4, 4, 3);
        assert_eq!(inject_loops(&mut m, &mut rng, f64::NAN), 1);
        let (mut m, mut rng) = tree(4, 4, 3);
        assert!(inject_loops(&mut m, &mut rng, 7.5) >= 1);
    }

    #[test]
    fn corridor_cannot_hold_a_loop() {
        let mut m = Maze::new(1, 6);
        let mut rng = seeded_rng(4);
        ensure_connected(&mut m, &mut rng);
        assert_eq!(inject_loops(&mut m, &mut rng, 1.0), 0);
    }

    #[test]
    fn blocked_cells_stay_closed() {
        let mut m = Maze::new(5, 5);
        m.block(Coord::new(2, 2));
        let mut rng = seeded_rng(6);
        DepthFirst.carve(&mut m, &mut rng);
        inject_loops(&mut m, &mut rng, 1.0);
        assert_eq!(
            m.wall_mask(Coord::new(2, 2)),
            Some(mazegen_core::WallMask::ALL)
        );
        assert!(analysis::is_wall_coherent(&m));
    }
}
