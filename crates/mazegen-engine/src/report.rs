//! Summary of one generation run.

use mazegen_carve::{Algorithm, CarveStats};
use mazegen_core::{Coord, PlacementError};
use std::fmt;

use crate::validate::PlacementConflict;

/// What a call to [`MazeSession::generate`](crate::MazeSession::generate)
/// produced.
///
/// `seed` is always the seed actually used, so any run can be replayed by
/// configuring that seed.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    /// Seed the generator was built from.
    pub seed: u64,
    /// Algorithm that carved the maze.
    pub algorithm: Algorithm,
    /// Number of pipeline runs, including the kept one.
    pub attempts: u32,
    /// Where the pattern ended up, if it was placed.
    pub pattern_origin: Option<Coord>,
    /// Why the pattern was not placed, when decoration was requested but
    /// the grid could not host it.
    pub placement_error: Option<PlacementError>,
    /// Conflict left in the kept attempt after retries ran out.
    pub conflict: Option<PlacementConflict>,
    /// Set when every anchor sealed off part of the grid and the kept
    /// maze was generated without the pattern.
    pub dropped_pattern: Option<PlacementConflict>,
    /// Walls opened per pass.
    pub carve: CarveStats,
    /// Open passages in the final maze.
    pub passages: usize,
    /// Non-blocked cells in the final maze.
    pub open_cells: usize,
    /// Cells on the solution path, `None` when there is none.
    pub path_len: Option<usize>,
}

impl GenerationReport {
    /// Whether the maze is a spanning tree by passage count.
    pub fn is_perfect(&self) -> bool {
        self.open_cells > 0 && self.passages == self.open_cells - 1
    }

    /// No conflict and a path exists.
    pub fn is_solvable(&self) -> bool {
        self.conflict.is_none() && self.path_len.is_some()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seed={} attempts={} passages={} open={}",
            self.algorithm, self.seed, self.attempts, self.passages, self.open_cells
        )?;
        match self.path_len {
            Some(n) => write!(f, " path={n}")?,
            None => write!(f, " path=none")?,
        }
        if let Some(origin) = self.pattern_origin {
            write!(f, " pattern=({origin})")?;
        }
        if let Some(reason) = &self.dropped_pattern {
            write!(f, " pattern dropped ({reason})")?;
        }
        Ok(())
    }
}
