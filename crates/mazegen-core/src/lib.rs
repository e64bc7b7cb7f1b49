//! Core types for the mazegen workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: grid coordinates, compass
//! directions, per-cell wall masks, solution paths, and the error types
//! that cross crate boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod path;
pub mod wall;

pub use error::{MoveError, PlacementError};
pub use id::{Coord, Direction};
pub use path::Path;
pub use wall::WallMask;
