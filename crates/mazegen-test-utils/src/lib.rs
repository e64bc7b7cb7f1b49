//! Test fixtures and invariant assertions for mazegen development.
//!
//! Fixtures build small mazes by hand so tests do not depend on a carver's
//! random choices. Assertions check the structural properties every
//! generated maze must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use mazegen_core::Coord;
use mazegen_grid::analysis;
use mazegen_grid::Maze;

/// Assert `maze` is a spanning tree over its open cells.
pub fn assert_perfect(maze: &Maze) {
    let open = maze.open_cell_count();
    let passages = analysis::open_passage_count(maze);
    assert_eq!(
        passages,
        open.saturating_sub(1),
        "perfect maze over {open} open cells has {passages} passages"
    );
    assert_eq!(analysis::component_count(maze), 1, "maze is disconnected");
    assert!(analysis::is_wall_coherent(maze), "wall masks disagree");
}

/// Assert `maze` is connected and has at least one loop.
pub fn assert_imperfect(maze: &Maze) {
    let open = maze.open_cell_count();
    let passages = analysis::open_passage_count(maze);
    assert!(
        passages > open.saturating_sub(1),
        "imperfect maze over {open} open cells has only {passages} passages"
    );
    assert_eq!(analysis::component_count(maze), 1, "maze is disconnected");
    assert!(analysis::is_wall_coherent(maze), "wall masks disagree");
}

/// Assert `cells` is a walkable route from `start` to `end`.
pub fn assert_valid_path(maze: &Maze, cells: &[Coord], start: Coord, end: Coord) {
    assert_eq!(cells.first(), Some(&start), "path does not begin at start");
    assert_eq!(cells.last(), Some(&end), "path does not finish at end");
    for pair in cells.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = a
            .direction_to(b)
            .unwrap_or_else(|| panic!("({a}) -> ({b}) is not a unit step"));
        assert!(maze.is_passable(a, dir), "({a}) -> ({b}) crosses a wall");
    }
    for &c in cells {
        assert!(!maze.is_blocked(c), "path enters blocked cell ({c})");
    }
}
