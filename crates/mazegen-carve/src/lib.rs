//! Passage carving for mazegen.
//!
//! A generation pass runs in three stages over one [`Maze`]:
//!
//! 1. A [`Carver`] (one of [`DepthFirst`], [`Prim`], [`HuntAndKill`],
//!    [`BinaryTree`]) opens passages between non-blocked cells.
//! 2. [`ensure_connected`] merges whatever components the carver left
//!    behind, using a shuffled union-find sweep.
//! 3. For imperfect mazes, [`inject_loops`] opens extra walls.
//!
//! [`carve_all`] runs the whole sequence. Every stage draws randomness from
//! the one [`MazeRng`] it is handed, so a seed fully determines the result.
//!
//! [`Maze`]: mazegen_grid::Maze

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary_tree;
pub mod carver;
pub mod connect;
pub mod dfs;
pub(crate) mod grid_helpers;
pub mod hunt_kill;
pub mod loops;
pub mod pipeline;
pub mod prim;

pub use binary_tree::BinaryTree;
pub use carver::{seeded_rng, Algorithm, Carver, MazeRng, ParseAlgorithmError};
pub use connect::{ensure_connected, DisjointSet};
pub use dfs::DepthFirst;
pub use hunt_kill::HuntAndKill;
pub use loops::{inject_loops, DEFAULT_LOOP_PROBABILITY};
pub use pipeline::{carve_all, CarveStats};
pub use prim::Prim;
