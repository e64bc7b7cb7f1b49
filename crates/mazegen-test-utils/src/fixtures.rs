//! Hand-built mazes.

use mazegen_core::{Coord, Direction};
use mazegen_grid::Maze;

/// A boustrophedon corridor: every row open east-west, joined alternately
/// at the east and west ends. A perfect maze whose single path visits
/// every cell.
pub fn serpentine(width: u32, height: u32) -> Maze {
    let mut m = Maze::new(width, height);
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w - 1 {
            m.carve(Coord::new(x, y), Direction::East);
        }
        if y + 1 < h {
            let x = if y % 2 == 0 { w - 1 } else { 0 };
            m.carve(Coord::new(x, y), Direction::South);
        }
    }
    m
}

/// A comb: the top row open east-west with every column hanging south
/// from it. Perfect; every column is a dead end.
pub fn comb(width: u32, height: u32) -> Maze {
    let mut m = Maze::new(width, height);
    let (w, h) = (width as i32, height as i32);
    for x in 0..w {
        if x + 1 < w {
            m.carve(Coord::new(x, 0), Direction::East);
        }
        for y in 0..h - 1 {
            m.carve(Coord::new(x, y), Direction::South);
        }
    }
    m
}

/// Every interior wall open.
pub fn open_room(width: u32, height: u32) -> Maze {
    let mut m = Maze::new(width, height);
    for c in m.coords().collect::<Vec<_>>() {
        for d in [Direction::East, Direction::South] {
            if m.in_bounds(c.step(d)) {
                m.carve(c, d);
            }
        }
    }
    m
}

/// A fully walled grid with row `row` blocked, except the cell at column
/// `gap` when given.
pub fn blocked_row(width: u32, height: u32, row: i32, gap: Option<i32>) -> Maze {
    let mut m = Maze::new(width, height);
    for x in 0..width as i32 {
        if Some(x) != gap {
            m.block(Coord::new(x, row));
        }
    }
    m
}

/// Two open halves split by a fully blocked middle column.
pub fn split_room(width: u32, height: u32) -> Maze {
    let mut m = open_room(width, height);
    let mid = width as i32 / 2;
    for y in 0..height as i32 {
        m.block(Coord::new(mid, y));
    }
    m
}
