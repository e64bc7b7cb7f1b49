//! mazegen: procedural grid mazes with a reserved decorative region.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all mazegen sub-crates. For most users, adding `mazegen` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mazegen::prelude::*;
//!
//! let config = MazeConfig::builder()
//!     .width(24)
//!     .height(16)
//!     .entry((0, 0))
//!     .exit((23, 15))
//!     .algorithm(Algorithm::HuntAndKill)
//!     .perfect(false)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let mut session = MazeSession::new(config).unwrap();
//! assert!(session.last_report().pattern_origin.is_some());
//!
//! let moves = session.moves().unwrap().to_string();
//! assert_eq!(replay_moves(Coord::new(0, 0), &moves), Ok(Coord::new(23, 15)));
//!
//! session.reseed(8);
//! let doc = session.export().unwrap();
//! assert!(decode(&doc).unwrap().verify().is_ok());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazegen-core` | Coordinates, directions, wall masks, paths, shared errors |
//! | [`grid`] | `mazegen-grid` | The `Maze` grid, pattern placement, structural analysis |
//! | [`carve`] | `mazegen-carve` | Carving algorithms, connectivity repair, loop injection |
//! | [`path`] | `mazegen-path` | BFS, A* and move strings |
//! | [`export`] | `mazegen-export` | Hex text export and import |
//! | [`engine`] | `mazegen-engine` | Configuration, placement validation, sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`mazegen-core`).
pub use mazegen_core as types;

/// The grid model and decorative pattern (`mazegen-grid`).
///
/// [`grid::Maze`] holds the wall masks; [`grid::analysis`] answers
/// structural questions about a carved maze.
pub use mazegen_grid as grid;

/// Carving passes (`mazegen-carve`).
///
/// Implement [`carve::Carver`] to plug in another algorithm.
pub use mazegen_carve as carve;

/// Shortest-path search (`mazegen-path`).
pub use mazegen_path as path;

/// Export format (`mazegen-export`).
pub use mazegen_export as export;

/// Generation sessions (`mazegen-engine`).
pub use mazegen_engine as engine;

/// Common imports for typical mazegen usage.
///
/// ```rust
/// use mazegen::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mazegen_core::{Coord, Direction, MoveError, Path, PlacementError, WallMask};

    // Grid
    pub use mazegen_grid::{place_pattern, Maze, Pattern};

    // Carving
    pub use mazegen_carve::{carve_all, seeded_rng, Algorithm, Carver, CarveStats, MazeRng};

    // Pathfinding
    pub use mazegen_path::{astar, bfs, path_to_moves, replay_moves, PathAlgorithm};

    // Export
    pub use mazegen_export::{decode, encode, DecodedMaze, ExportError};

    // Engine
    pub use mazegen_engine::{
        ConfigError, GenerationReport, MazeConfig, MazeSession, PlacementConflict,
    };
}
