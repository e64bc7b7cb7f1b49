//! Placement validation: the pattern must not get in the solution's way.

use mazegen_core::{Coord, Path};
use mazegen_grid::{analysis, Maze};
use std::error::Error;
use std::fmt;

/// Why a generated maze with its pattern is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementConflict {
    /// The entry or exit is a blocked cell.
    EndpointBlocked {
        /// The blocked endpoint.
        coord: Coord,
    },
    /// The path runs through a blocked cell.
    PathOverlap {
        /// First blocked cell on the path.
        coord: Coord,
    },
    /// No path joins entry and exit.
    Unreachable {
        /// Path start.
        entry: Coord,
        /// Path end.
        exit: Coord,
    },
    /// The pattern cut the open cells into regions no carving can join.
    Partitioned {
        /// Connected components left after carving.
        components: usize,
    },
}

impl fmt::Display for PlacementConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointBlocked { coord } => {
                write!(f, "endpoint ({coord}) lies on the pattern")
            }
            Self::PathOverlap { coord } => write!(f, "path crosses pattern cell ({coord})"),
            Self::Unreachable { entry, exit } => {
                write!(f, "no path from ({entry}) to ({exit})")
            }
            Self::Partitioned { components } => {
                write!(f, "pattern splits the maze into {components} regions")
            }
        }
    }
}

impl Error for PlacementConflict {}

/// Check that the placed pattern leaves a usable solution.
///
/// Endpoints are checked first, then path existence, then overlap.
pub fn check_placement(
    maze: &Maze,
    entry: Coord,
    exit: Coord,
    path: Option<&Path>,
) -> Result<(), PlacementConflict> {
    for coord in [entry, exit] {
        if maze.is_blocked(coord) {
            return Err(PlacementConflict::EndpointBlocked { coord });
        }
    }
    let path = path.ok_or(PlacementConflict::Unreachable { entry, exit })?;
    if let Some(&coord) = path.cells().iter().find(|&&c| maze.is_blocked(c)) {
        return Err(PlacementConflict::PathOverlap { coord });
    }
    Ok(())
}

/// Check that every open cell is reachable from every other.
///
/// Carving cannot cross blocked cells, so a pattern pressed against the
/// grid edge can seal off pockets that no passage will ever reach.
pub fn check_connected(maze: &Maze) -> Result<(), PlacementConflict> {
    match analysis::component_count(maze) {
        0 | 1 => Ok(()),
        components => Err(PlacementConflict::Partitioned { components }),
    }
}
