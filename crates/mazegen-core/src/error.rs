//! Error types shared across mazegen crates.
//!
//! Configuration and persistence errors live next to the code that raises
//! them (`mazegen-engine`, `mazegen-export`); the types here are the ones
//! produced by leaf crates and surfaced unchanged by the engine.

use crate::id::{Coord, Direction};
use std::error::Error;
use std::fmt;

/// The decorative pattern could not be placed.
///
/// Non-fatal: generation proceeds without the decoration and the caller
/// is told why via this value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// Some pattern cell would fall outside the grid at `origin`.
    DoesNotFit {
        /// Pattern bounding-box width.
        pattern_width: u32,
        /// Pattern bounding-box height.
        pattern_height: u32,
        /// Grid width.
        grid_width: u32,
        /// Grid height.
        grid_height: u32,
        /// The anchor that was tried.
        origin: Coord,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoesNotFit {
                pattern_width,
                pattern_height,
                grid_width,
                grid_height,
                origin,
            } => write!(
                f,
                "{pattern_width}x{pattern_height} pattern at ({origin}) does not fit \
                 in a {grid_width}x{grid_height} grid"
            ),
        }
    }
}

impl Error for PlacementError {}

/// A move string could not be replayed.
///
/// `index` is the zero-based position of the offending move (or path
/// step) so a defect can be located in a saved solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The character is not one of `N`, `E`, `S`, `W`.
    InvalidLetter {
        /// Position in the move string.
        index: usize,
        /// The offending character.
        letter: char,
    },
    /// Replaying the move would cross a closed wall.
    WallCrossed {
        /// Position in the move string.
        index: usize,
        /// Cell the move started from.
        from: Coord,
        /// Attempted direction.
        direction: Direction,
    },
    /// Replaying the move would leave the grid.
    OutOfBounds {
        /// Position in the move string.
        index: usize,
        /// Cell the move started from.
        from: Coord,
        /// Attempted direction.
        direction: Direction,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter { index, letter } => {
                write!(f, "move {index}: invalid letter {letter:?}")
            }
            Self::WallCrossed {
                index,
                from,
                direction,
            } => write!(f, "move {index}: wall blocks {direction} from ({from})"),
            Self::OutOfBounds {
                index,
                from,
                direction,
            } => write!(f, "move {index}: {direction} from ({from}) leaves the grid"),
        }
    }
}

impl Error for MoveError {}
