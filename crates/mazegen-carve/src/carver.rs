//! The carver seam and algorithm selection.

use crate::{BinaryTree, DepthFirst, HuntAndKill, Prim};
use mazegen_grid::Maze;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The random generator threaded through every carving pass.
pub type MazeRng = ChaCha8Rng;

/// Build a fresh generator for one generation call.
pub fn seeded_rng(seed: u64) -> MazeRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A passage-carving algorithm.
///
/// Implementations start from a fully walled maze (blocked cells already
/// registered), treat blocked cells as impassable, and return the number
/// of walls they removed. They never touch blocked cells.
pub trait Carver {
    /// Short lowercase name, the same token [`Algorithm`] parses.
    fn name(&self) -> &'static str;

    /// Carve passages into `maze`, returning the number of walls removed.
    fn carve(&self, maze: &mut Maze, rng: &mut MazeRng) -> usize;
}

/// The closed set of carving algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Randomized depth-first backtracker.
    #[default]
    Dfs,
    /// Randomized Prim's algorithm.
    Prim,
    /// Hunt-and-kill.
    HuntAndKill,
    /// Binary tree (east/south bias).
    BinaryTree,
}

impl Algorithm {
    /// All algorithms, in token order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Prim,
        Algorithm::HuntAndKill,
        Algorithm::BinaryTree,
    ];

    /// Canonical token.
    pub fn token(self) -> &'static str {
        self.carver().name()
    }

    /// The implementation behind this variant.
    pub fn carver(self) -> &'static dyn Carver {
        match self {
            Self::Dfs => &DepthFirst,
            Self::Prim => &Prim,
            Self::HuntAndKill => &HuntAndKill,
            Self::BinaryTree => &BinaryTree,
        }
    }

    /// Lenient parse: an unrecognised token selects [`Algorithm::Dfs`].
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: ParseAlgorithmError| {
            log::warn!("{err}; falling back to dfs");
            Self::Dfs
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Strict parse of an algorithm token (case-insensitive).
impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "prim" => Ok(Self::Prim),
            "hunt" | "hunt_and_kill" => Ok(Self::HuntAndKill),
            "binary_tree" => Ok(Self::BinaryTree),
            _ => Err(ParseAlgorithmError {
                token: s.to_string(),
            }),
        }
    }
}

/// The token did not name a known algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The rejected token, as given.
    pub token: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected dfs, prim, hunt or binary_tree)",
            self.token
        )
    }
}

impl Error for ParseAlgorithmError {}
