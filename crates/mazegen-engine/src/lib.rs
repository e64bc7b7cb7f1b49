//! Maze generation sessions.
//!
//! [`MazeSession`] is the entry point: it owns one [`Maze`] and a validated
//! [`MazeConfig`], and every regeneration request (reseed, algorithm switch,
//! perfect toggle, new endpoints) re-runs the full pipeline into that maze:
//!
//! 1. reset the grid and place the decorative pattern (if it fits);
//! 2. carve, repair connectivity and optionally inject loops;
//! 3. search for the entry-to-exit path;
//! 4. check the pattern does not sit on an endpoint or the path and does
//!    not seal off part of the grid, and retry with the pattern at another
//!    anchor if it does. When every anchor seals off a pocket, one last
//!    run drops the pattern.
//!
//! The outcome of each run is summarised in a [`GenerationReport`].
//!
//! [`Maze`]: mazegen_grid::Maze

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod session;
pub mod validate;

pub use config::{
    ConfigError, MazeConfig, MazeConfigBuilder, DEFAULT_MAX_PLACEMENT_ATTEMPTS, MAX_DIMENSION,
};
pub use report::GenerationReport;
pub use session::MazeSession;
pub use validate::{check_connected, check_placement, PlacementConflict};
