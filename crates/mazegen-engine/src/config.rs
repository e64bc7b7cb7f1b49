//! Generation configuration and validation.
//!
//! [`MazeConfig`] is checked by [`validate()`](MazeConfig::validate) before
//! any generation runs, so a rejected configuration never touches a maze.

use mazegen_carve::{Algorithm, ParseAlgorithmError, DEFAULT_LOOP_PROBABILITY};
use mazegen_core::Coord;
use mazegen_path::PathAlgorithm;
use std::error::Error;
use std::fmt;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 4096;

/// Default cap on pattern re-anchoring attempts.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 5;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected during [`MazeConfig::validate()`] or
/// [`MazeConfigBuilder::build()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required builder field was never set.
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// Width or height is zero.
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Width or height exceeds [`MAX_DIMENSION`].
    DimensionTooLarge {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// The entry lies outside the grid.
    EntryOutOfBounds {
        /// The configured entry.
        entry: Coord,
    },
    /// The exit lies outside the grid.
    ExitOutOfBounds {
        /// The configured exit.
        exit: Coord,
    },
    /// Entry and exit are the same cell.
    EntryEqualsExit {
        /// The shared coordinate.
        coord: Coord,
    },
    /// An algorithm token was given that names no algorithm.
    UnknownAlgorithm(ParseAlgorithmError),
    /// `loop_probability` is NaN or outside `0.0..=1.0`.
    InvalidLoopProbability {
        /// The invalid value.
        value: f64,
    },
    /// `max_placement_attempts` is zero.
    ZeroPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{field}'"),
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} has no cells")
            }
            Self::DimensionTooLarge { width, height } => write!(
                f,
                "grid {width}x{height} exceeds the {MAX_DIMENSION} cell limit per side"
            ),
            Self::EntryOutOfBounds { entry } => write!(f, "entry ({entry}) is outside the grid"),
            Self::ExitOutOfBounds { exit } => write!(f, "exit ({exit}) is outside the grid"),
            Self::EntryEqualsExit { coord } => {
                write!(f, "entry and exit are both ({coord})")
            }
            Self::UnknownAlgorithm(e) => write!(f, "{e}"),
            Self::InvalidLoopProbability { value } => {
                write!(f, "loop_probability must be within 0.0..=1.0, got {value}")
            }
            Self::ZeroPlacementAttempts => {
                write!(f, "max_placement_attempts must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownAlgorithm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseAlgorithmError> for ConfigError {
    fn from(e: ParseAlgorithmError) -> Self {
        Self::UnknownAlgorithm(e)
    }
}

// ── MazeConfig ──────────────────────────────────────────────────

/// Everything a generation run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Start cell of the solution path.
    pub entry: Coord,
    /// End cell of the solution path.
    pub exit: Coord,
    /// Carving algorithm.
    pub algorithm: Algorithm,
    /// `true` for a spanning tree, `false` to inject loops.
    pub perfect: bool,
    /// Seed for the run. `None` draws a fresh seed per generation.
    pub seed: Option<u64>,
    /// Per-cell loop chance for imperfect mazes.
    pub loop_probability: f64,
    /// Cap on pattern anchors tried when the pattern conflicts with the
    /// path.
    pub max_placement_attempts: u32,
    /// Search used for the solution path.
    pub path_algorithm: PathAlgorithm,
    /// Whether to place the decorative pattern.
    pub decorate: bool,
}

impl MazeConfig {
    /// A configuration with default options for the given grid and
    /// endpoints. Not validated.
    pub fn new(width: u32, height: u32, entry: Coord, exit: Coord) -> Self {
        Self {
            width,
            height,
            entry,
            exit,
            algorithm: Algorithm::default(),
            perfect: true,
            seed: None,
            loop_probability: DEFAULT_LOOP_PROBABILITY,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            path_algorithm: PathAlgorithm::default(),
            decorate: true,
        }
    }

    /// Start a builder.
    pub fn builder() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    /// Check every invariant. Called by the session before it mutates
    /// anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty grid.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        // 2. Bounded dimensions, so flat indices and i32 coordinates fit.
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        // 3. Endpoints on the grid and distinct.
        if !self.in_bounds(self.entry) {
            return Err(ConfigError::EntryOutOfBounds { entry: self.entry });
        }
        if !self.in_bounds(self.exit) {
            return Err(ConfigError::ExitOutOfBounds { exit: self.exit });
        }
        if self.entry == self.exit {
            return Err(ConfigError::EntryEqualsExit { coord: self.entry });
        }
        // 4. Loop probability is a probability.
        if !(0.0..=1.0).contains(&self.loop_probability) {
            return Err(ConfigError::InvalidLoopProbability {
                value: self.loop_probability,
            });
        }
        // 5. At least one placement attempt.
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }
}

// ── MazeConfigBuilder ───────────────────────────────────────────

/// Builder for [`MazeConfig`].
///
/// Required: `width`, `height`, `entry`, `exit`.
#[derive(Clone, Debug, Default)]
pub struct MazeConfigBuilder {
    width: Option<u32>,
    height: Option<u32>,
    entry: Option<Coord>,
    exit: Option<Coord>,
    algorithm: Option<Algorithm>,
    algorithm_token: Option<String>,
    perfect: Option<bool>,
    seed: Option<u64>,
    loop_probability: Option<f64>,
    max_placement_attempts: Option<u32>,
    path_algorithm: Option<PathAlgorithm>,
    decorate: Option<bool>,
}

impl MazeConfigBuilder {
    /// Grid width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Grid height.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Path start.
    pub fn entry(mut self, entry: impl Into<Coord>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Path end.
    pub fn exit(mut self, exit: impl Into<Coord>) -> Self {
        self.exit = Some(exit.into());
        self
    }

    /// Carving algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self.algorithm_token = None;
        self
    }

    /// Carving algorithm by token, parsed strictly at
    /// [`build()`](Self::build). For the lenient fallback to `dfs`, pass
    /// [`Algorithm::from_token_or_default`] to
    /// [`algorithm()`](Self::algorithm) instead.
    pub fn algorithm_token(mut self, token: impl Into<String>) -> Self {
        self.algorithm_token = Some(token.into());
        self.algorithm = None;
        self
    }

    /// Perfect (tree) or imperfect (loops) maze.
    pub fn perfect(mut self, perfect: bool) -> Self {
        self.perfect = Some(perfect);
        self
    }

    /// Fixed seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Per-cell loop chance for imperfect mazes.
    pub fn loop_probability(mut self, p: f64) -> Self {
        self.loop_probability = Some(p);
        self
    }

    /// Cap on pattern re-anchoring attempts.
    pub fn max_placement_attempts(mut self, n: u32) -> Self {
        self.max_placement_attempts = Some(n);
        self
    }

    /// Search used for the solution path.
    pub fn path_algorithm(mut self, alg: PathAlgorithm) -> Self {
        self.path_algorithm = Some(alg);
        self
    }

    /// Whether to place the decorative pattern.
    pub fn decorate(mut self, decorate: bool) -> Self {
        self.decorate = Some(decorate);
        self
    }

    /// Assemble and validate.
    pub fn build(self) -> Result<MazeConfig, ConfigError> {
        let width = self.width.ok_or(ConfigError::MissingField { field: "width" })?;
        let height = self.height.ok_or(ConfigError::MissingField { field: "height" })?;
        let entry = self.entry.ok_or(ConfigError::MissingField { field: "entry" })?;
        let exit = self.exit.ok_or(ConfigError::MissingField { field: "exit" })?;

        let mut config = MazeConfig::new(width, height, entry, exit);
        if let Some(token) = self.algorithm_token {
            config.algorithm = token.parse()?;
        }
        if let Some(alg) = self.algorithm {
            config.algorithm = alg;
        }
        if let Some(v) = self.perfect {
            config.perfect = v;
        }
        config.seed = self.seed;
        if let Some(v) = self.loop_probability {
            config.loop_probability = v;
        }
        if let Some(v) = self.max_placement_attempts {
            config.max_placement_attempts = v;
        }
        if let Some(v) = self.path_algorithm {
            config.path_algorithm = v;
        }
        if let Some(v) = self.decorate {
            config.decorate = v;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> MazeConfig {
        MazeConfig::new(20, 15, Coord::new(0, 0), Coord::new(19, 14))
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn defaults() {
        let cfg = valid_config();
        assert_eq!(cfg.algorithm, Algorithm::Dfs);
        assert!(cfg.perfect);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.loop_probability, 0.10);
        assert_eq!(cfg.max_placement_attempts, 5);
        assert_eq!(cfg.path_algorithm, PathAlgorithm::Bfs);
        assert!(cfg.decorate);
    }

    #[test]
    fn validate_empty_grid_fails() {
        let mut cfg = valid_config();
        cfg.width = 0;
        match cfg.validate() {
            Err(ConfigError::EmptyGrid { width: 0, .. }) => {}
            other => panic!("expected EmptyGrid, got {other:?}"),
        }
    }

    #[test]
    fn validate_huge_grid_fails() {
        let mut cfg = valid_config();
        cfg.height = MAX_DIMENSION + 1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn validate_endpoints() {
        let mut cfg = valid_config();
        cfg.entry = Coord::new(20, 0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EntryOutOfBounds { .. })
        ));
        cfg.entry = Coord::new(0, 0);
        cfg.exit = Coord::new(0, -1);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ExitOutOfBounds { .. })
        ));
        cfg.exit = Coord::new(0, 0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EntryEqualsExit {
                coord: Coord::new(0, 0)
            })
        );
    }

    #[test]
    fn validate_loop_probability() {
        for bad in [f64::NAN, -0.1, 1.5] {
            let mut cfg = valid_config();
            cfg.loop_probability = bad;
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidLoopProbability { .. })
            ));
        }
    }

    #[test]
    fn validate_zero_attempts() {
        let mut cfg = valid_config();
        cfg.max_placement_attempts = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPlacementAttempts));
    }

    #[test]
    fn builder_requires_fields() {
        let err = MazeConfig::builder().width(5).height(5).entry((0, 0)).build();
        assert_eq!(err, Err(ConfigError::MissingField { field: "exit" }));
    }

    #[test]
    fn builder_strict_token() {
        let base = || {
            MazeConfig::builder()
                .width(8)
                .height(8)
                .entry((0, 0))
                .exit((7, 7))
        };
        let cfg = base().algorithm_token("Prim").build().unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Prim);
        let err = base().algorithm_token("eller").build().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAlgorithm(_)));
        assert!(std::error::Error::source(&err).is_some());
        let cfg = base()
            .algorithm(Algorithm::from_token_or_default("eller"))
            .build()
            .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Dfs);
    }

    #[test]
    fn builder_sets_options() {
        let cfg = MazeConfig::builder()
            .width(30)
            .height(20)
            .entry((1, 1))
            .exit((28, 18))
            .algorithm(Algorithm::HuntAndKill)
            .perfect(false)
            .seed(9)
            .loop_probability(0.25)
            .max_placement_attempts(2)
            .path_algorithm(PathAlgorithm::AStar)
            .decorate(false)
            .build()
            .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::HuntAndKill);
        assert!(!cfg.perfect);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.loop_probability, 0.25);
        assert_eq!(cfg.max_placement_attempts, 2);
        assert_eq!(cfg.path_algorithm, PathAlgorithm::AStar);
        assert!(!cfg.decorate);
    }

    #[test]
    fn builder_validates() {
        let err = MazeConfig::builder()
            .width(4)
            .height(4)
            .entry((0, 0))
            .exit((0, 0))
            .build();
        assert!(matches!(err, Err(ConfigError::EntryEqualsExit { .. })));
    }
}
