//! A* search with the Manhattan heuristic.

use crate::{endpoints, rebuild};
use mazegen_core::{Coord, Path};
use mazegen_grid::Maze;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Shortest path from `start` to `end`, expanding cells in order of
/// `g + h` where `h` is the Manhattan distance to `end`.
///
/// On a unit-cost 4-connected grid the heuristic is consistent, so the
/// first time `end` is popped its cost is optimal and the path length
/// equals the one [`bfs`](crate::bfs) finds. Ties on `f` prefer the lower
/// `h`, then insertion order, so results are deterministic.
///
/// Returns `None` under the same conditions as [`bfs`](crate::bfs).
pub fn astar(maze: &Maze, start: Coord, end: Coord) -> Option<Path> {
    let (s, e) = endpoints(maze, start, end)?;
    let n = maze.cell_count();
    let mut best_g = vec![u32::MAX; n];
    let mut parent = vec![usize::MAX; n];
    let mut closed = vec![false; n];
    let mut open: BinaryHeap<Reverse<(u32, u32, u64, usize)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best_g[s] = 0;
    parent[s] = s;
    let h0 = start.manhattan(end);
    open.push(Reverse((h0, h0, seq, s)));

    while let Some(Reverse((_, _, _, i))) = open.pop() {
        if closed[i] {
            continue;
        }
        if i == e {
            return rebuild(maze, &parent, e);
        }
        closed[i] = true;
        let cell = maze.coord_of(i);
        let g = best_g[i] + 1;
        for (_, nb) in maze.passable_neighbours(cell) {
            let Some(j) = maze.index_of(nb) else {
                continue;
            };
            if closed[j] || g >= best_g[j] {
                continue;
            }
            best_g[j] = g;
            parent[j] = i;
            let h = nb.manhattan(end);
            seq += 1;
            open.push(Reverse((g + h, h, seq, j)));
        }
    }
    None
}
