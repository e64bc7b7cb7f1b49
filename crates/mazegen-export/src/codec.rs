//! Rendering a maze and its solution as export text.

use mazegen_core::{Coord, Path, WallMask};
use mazegen_grid::Maze;
use mazegen_path::path_to_moves;

/// One string per grid row, one uppercase hex digit per cell.
///
/// Blocked cells always render as `F`.
pub fn encode_rows(maze: &Maze) -> Vec<String> {
    maze.rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, mask)| {
                    let coord = Coord::new(x as i32, y as i32);
                    if maze.is_blocked(coord) {
                        WallMask::ALL.to_hex_digit()
                    } else {
                        mask.to_hex_digit()
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// The full export document, newline-terminated.
///
/// `path` should run from `entry` to `exit`; its steps become the move
/// line.
pub fn encode(maze: &Maze, entry: Coord, exit: Coord, path: &Path) -> String {
    let mut out = String::new();
    for row in encode_rows(maze) {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("{entry}\n{exit}\n"));
    out.push_str(&path_to_moves(path.cells()));
    out.push('\n');
    out
}
