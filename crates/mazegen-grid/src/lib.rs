//! Grid model for mazegen.
//!
//! This crate owns the [`Maze`] type, the single piece of mutable state a
//! generation pass works on: a row-major array of [`WallMask`] values plus
//! a registry of permanently closed cells. Carving, pathfinding and export
//! all address cells purely by [`Coord`]; the wall-mask array is the arena.
//!
//! # Pattern placement
//!
//! [`Pattern`] describes a fixed decorative cell shape. [`place_pattern`]
//! centres it on the grid and marks its cells blocked; a grid too small to
//! host it is reported through [`PlacementError`] and left untouched.
//!
//! # Analysis
//!
//! The [`analysis`] module answers structural questions (passage count,
//! component count, wall coherence) used by tests and reports.
//!
//! [`WallMask`]: mazegen_core::WallMask
//! [`Coord`]: mazegen_core::Coord
//! [`PlacementError`]: mazegen_core::PlacementError

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod maze;
pub mod pattern;

#[cfg(test)]
pub(crate) mod compliance;

pub use maze::{Maze, Neighbours};
pub use pattern::{place_pattern, place_pattern_at, Pattern};
