//! Maze invariant test helpers.
//!
//! Reused by the unit tests of every module that mutates a [`Maze`].

use crate::analysis;
use crate::maze::Maze;
use mazegen_core::{Direction, WallMask};

/// Assert that shared walls agree and the outer boundary is closed.
pub fn assert_walls_coherent(maze: &Maze) {
    for c in maze.coords() {
        for d in Direction::ALL {
            let nb = c.step(d);
            let here = maze.has_wall(c, d);
            if maze.in_bounds(nb) {
                let there = maze.has_wall(nb, d.opposite());
                assert_eq!(here, there, "wall {d} of ({c}) disagrees with ({nb})");
            } else {
                assert!(here, "boundary wall {d} of ({c}) is open");
            }
        }
    }
    assert!(analysis::is_wall_coherent(maze));
}

/// Assert every blocked cell is fully closed and in bounds.
pub fn assert_blocked_closed(maze: &Maze) {
    for &c in maze.blocked_cells() {
        assert!(maze.in_bounds(c), "blocked cell ({c}) out of bounds");
        assert_eq!(
            maze.wall_mask(c),
            Some(WallMask::ALL),
            "blocked cell ({c}) has an open side"
        );
    }
}

/// Assert `open_cells` and `open_cell_count` agree.
pub fn assert_open_cells_consistent(maze: &Maze) {
    let listed = maze.open_cells().count();
    assert_eq!(listed, maze.open_cell_count());
    assert!(maze.open_cells().all(|c| !maze.is_blocked(c)));
}

/// Run all compliance checks.
pub fn run_full_compliance(maze: &Maze) {
    assert_walls_coherent(maze);
    assert_blocked_closed(maze);
    assert_open_cells_consistent(maze);
}
