//! Error types for export and import.

use mazegen_core::{Coord, MoveError};
use std::fmt;
use std::io;

/// Errors raised while saving, loading or verifying an exported maze.
#[derive(Debug)]
pub enum ExportError {
    /// An I/O error occurred while writing or reading.
    Io(io::Error),
    /// Saving was requested but no path exists between entry and exit.
    NoPath,
    /// The document does not follow the export format.
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// Decoded wall masks disagree across a shared wall or leave the
    /// outer boundary open.
    Incoherent,
    /// The move string crosses a wall or leaves the grid.
    Replay(MoveError),
    /// The move string ends somewhere other than the recorded exit.
    ExitMismatch {
        /// The exit line of the document.
        expected: Coord,
        /// Where the moves actually lead.
        reached: Coord,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NoPath => write!(f, "no path from entry to exit; nothing to save"),
            Self::Malformed { line, detail } => write!(f, "malformed export at line {line}: {detail}"),
            Self::Incoherent => write!(f, "wall masks are not mutually consistent"),
            Self::Replay(e) => write!(f, "move replay failed: {e}"),
            Self::ExitMismatch { expected, reached } => {
                write!(f, "moves end at ({reached}), expected exit ({expected})")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Replay(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MoveError> for ExportError {
    fn from(e: MoveError) -> Self {
        Self::Replay(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_is_the_source() {
        let err = ExportError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(err.to_string().contains("nope"));
        assert!(err.source().is_some());
    }

    #[test]
    fn malformed_names_the_line() {
        let err = ExportError::Malformed {
            line: 4,
            detail: "ragged row".into(),
        };
        assert_eq!(err.to_string(), "malformed export at line 4: ragged row");
        assert!(err.source().is_none());
    }
}
