//! Parsing export text back into a maze.

use crate::error::ExportError;
use mazegen_core::{Coord, Direction, WallMask};
use mazegen_grid::{analysis, Maze};
use mazegen_path::walk_moves;

/// A parsed export document.
///
/// Blocked cells are not distinguishable from fully walled open cells in
/// the format, so the decoded maze has an empty blocked set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedMaze {
    maze: Maze,
    entry: Coord,
    exit: Coord,
    moves: String,
}

impl DecodedMaze {
    /// Grid width.
    pub fn width(&self) -> u32 {
        self.maze.width()
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.maze.height()
    }

    /// Row-major wall masks.
    pub fn masks(&self) -> &[WallMask] {
        self.maze.wall_masks()
    }

    /// Entry coordinate.
    pub fn entry(&self) -> Coord {
        self.entry
    }

    /// Exit coordinate.
    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// The move string.
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// A grid holding the decoded wall masks.
    pub fn to_maze(&self) -> Maze {
        self.maze.clone()
    }

    /// Check the document is a valid solution.
    ///
    /// The wall masks must be coherent, and the moves must lead from the
    /// entry to the exit through open walls only.
    pub fn verify(&self) -> Result<(), ExportError> {
        if !analysis::is_wall_coherent(&self.maze) {
            return Err(ExportError::Incoherent);
        }
        let reached = walk_moves(&self.maze, self.entry, &self.moves)?;
        if reached != self.exit {
            return Err(ExportError::ExitMismatch {
                expected: self.exit,
                reached,
            });
        }
        Ok(())
    }
}

fn malformed(line: usize, detail: impl Into<String>) -> ExportError {
    ExportError::Malformed {
        line,
        detail: detail.into(),
    }
}

fn parse_coord(text: &str, line: usize, what: &str) -> Result<Coord, ExportError> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| malformed(line, format!("{what} '{text}' is not x,y")))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| malformed(line, format!("{what} x: {e}")))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| malformed(line, format!("{what} y: {e}")))?;
    Ok(Coord::new(x, y))
}

/// Parse an export document.
///
/// Accepts `\r\n` line endings and a missing final newline. An absent move
/// line reads as an empty move string.
pub fn decode(text: &str) -> Result<DecodedMaze, ExportError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r')).enumerate();
    let mut masks = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0u32;

    loop {
        let Some((i, row)) = lines.next() else {
            return Err(malformed(i_after(text), "missing blank line after grid rows"));
        };
        let line = i + 1;
        if row.is_empty() {
            break;
        }
        let expected = *width.get_or_insert(row.chars().count());
        if row.chars().count() != expected {
            return Err(malformed(
                line,
                format!("row has {} cells, expected {expected}", row.chars().count()),
            ));
        }
        for ch in row.chars() {
            let mask = WallMask::from_hex_digit(ch)
                .ok_or_else(|| malformed(line, format!("'{ch}' is not a hex digit")))?;
            masks.push(mask);
        }
        height += 1;
    }

    let Some(width) = width else {
        return Err(malformed(1, "no grid rows"));
    };
    let width = width as u32;

    let (i, entry_text) = lines
        .next()
        .ok_or_else(|| malformed(i_after(text), "missing entry line"))?;
    let entry = parse_coord(entry_text, i + 1, "entry")?;
    let (i, exit_text) = lines
        .next()
        .ok_or_else(|| malformed(i_after(text), "missing exit line"))?;
    let exit = parse_coord(exit_text, i + 1, "exit")?;

    let (moves, moves_line) = match lines.next() {
        Some((i, m)) => (m.trim().to_string(), i + 1),
        None => (String::new(), i_after(text)),
    };
    if let Some((index, bad)) = moves
        .chars()
        .enumerate()
        .find(|&(_, c)| Direction::from_letter(c).is_none())
    {
        return Err(malformed(
            moves_line,
            format!("move {index} '{bad}' is not N, E, S or W"),
        ));
    }
    if let Some((i, extra)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(malformed(i + 1, format!("unexpected trailing line '{extra}'")));
    }

    let maze = Maze::from_wall_masks(width, height, masks)
        .ok_or_else(|| malformed(1, "grid size does not match row data"))?;
    for (what, c) in [("entry", entry), ("exit", exit)] {
        if !maze.in_bounds(c) {
            return Err(malformed(
                1,
                format!("{what} ({c}) is outside the {width}x{height} grid"),
            ));
        }
    }
    log::debug!("decoded {width}x{height} maze, {} moves", moves.len());
    Ok(DecodedMaze {
        maze,
        entry,
        exit,
        moves,
    })
}

/// Line number one past the end of `text`.
fn i_after(text: &str) -> usize {
    text.lines().count() + 1
}
