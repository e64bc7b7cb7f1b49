//! The generation session: one owned maze, regenerated on request.
//!
//! # Ownership model
//!
//! `MazeSession` owns its [`Maze`] outright. Every mutating method takes
//! `&mut self` and fully rebuilds the grid before returning, and readers
//! borrow through `&self`, so no caller can observe a half-generated maze.
//!
//! # Retries
//!
//! A placed pattern can land on the entry or exit. When that happens the
//! pipeline runs again with the pattern at the next anchor from
//! [`Pattern::retry_origins`], using the same seed, until the result is
//! clean or `max_placement_attempts` runs have been made. A pattern that
//! seals off part of the open grid counts as a conflict too.
//!
//! When the retries run out, the last run is kept, unless its maze is
//! partitioned. In that case one more run is made without the pattern, so
//! the kept maze always has a single connected region.

use crate::config::{ConfigError, MazeConfig};
use crate::report::GenerationReport;
use crate::validate::{check_connected, check_placement, PlacementConflict};
use mazegen_carve::{carve_all, seeded_rng, Algorithm, CarveStats};
use mazegen_core::{Coord, Path, PlacementError};
use mazegen_export::{encode, save, ExportError};
use mazegen_grid::{analysis, place_pattern, place_pattern_at, Maze, Pattern};
use mazegen_path::path_to_moves;

/// Where a pipeline run puts the pattern.
#[derive(Clone, Copy, Debug)]
enum Anchor {
    /// Centred, if the grid can host it.
    Centre,
    /// At a known fitting origin.
    At(Coord),
    /// No pattern.
    Bare,
}

/// Result of one pipeline run.
struct Attempt {
    placement_error: Option<PlacementError>,
    carve: CarveStats,
    path: Option<Path>,
    conflict: Option<PlacementConflict>,
    /// Set when the open cells ended up in more than one region.
    partition: Option<PlacementConflict>,
}

/// A maze plus the configuration that produced it.
///
/// # Examples
///
/// ```
/// use mazegen_engine::{MazeConfig, MazeSession};
///
/// let config = MazeConfig::builder()
///     .width(20)
///     .height(15)
///     .entry((0, 0))
///     .exit((19, 14))
///     .seed(42)
///     .build()
///     .unwrap();
/// let session = MazeSession::new(config).unwrap();
/// assert!(session.last_report().is_solvable());
/// assert!(session.moves().is_some());
/// ```
#[derive(Debug)]
pub struct MazeSession {
    config: MazeConfig,
    pattern: Pattern,
    maze: Maze,
    path: Option<Path>,
    moves: Option<String>,
    report: GenerationReport,
}

impl MazeSession {
    /// Validate `config` and generate the first maze.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            maze: Maze::new(config.width, config.height),
            pattern: Pattern::forty_two(),
            path: None,
            moves: None,
            report: GenerationReport {
                seed: 0,
                algorithm: config.algorithm,
                attempts: 0,
                pattern_origin: None,
                placement_error: None,
                conflict: None,
                dropped_pattern: None,
                carve: CarveStats::default(),
                passages: 0,
                open_cells: 0,
                path_len: None,
            },
            config,
        };
        session.generate();
        Ok(session)
    }

    /// Re-run the whole pipeline with the current configuration.
    ///
    /// An unseeded configuration draws a fresh seed on every call; the
    /// report records it.
    pub fn generate(&mut self) -> &GenerationReport {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let anchors = self.anchors();
        let total = anchors.len();
        let mut attempts = 0;
        let mut last = None;

        for (i, anchor) in anchors.into_iter().enumerate() {
            attempts += 1;
            let attempt = self.run_attempt(seed, anchor);
            let clean = attempt.conflict.is_none();
            if let Some(conflict) = &attempt.conflict {
                log::debug!("attempt {} of {total}: {conflict}", i + 1);
            }
            last = Some(attempt);
            if clean {
                break;
            }
        }

        // `anchors()` never returns an empty list.
        let mut attempt = last.unwrap_or_else(|| self.run_attempt(seed, Anchor::Bare));
        let mut dropped_pattern = None;
        if let Some(partition) = attempt.partition.take() {
            log::warn!("dropping pattern after {attempts} attempts: {partition}");
            attempts += 1;
            attempt = self.run_attempt(seed, Anchor::Bare);
            dropped_pattern = Some(partition);
        } else if let Some(conflict) = &attempt.conflict {
            log::warn!("keeping attempt {attempts} of {total} despite conflict: {conflict}");
        }
        self.moves = attempt.path.as_ref().map(|p| path_to_moves(p.cells()));
        self.report = GenerationReport {
            seed,
            algorithm: self.config.algorithm,
            attempts,
            pattern_origin: self.maze.pattern_origin(),
            placement_error: attempt.placement_error,
            conflict: attempt.conflict,
            dropped_pattern,
            carve: attempt.carve,
            passages: analysis::open_passage_count(&self.maze),
            open_cells: self.maze.open_cell_count(),
            path_len: attempt.path.as_ref().map(Path::len),
        };
        self.path = attempt.path;
        log::info!("generated {}x{} maze: {}", self.config.width, self.config.height, self.report);
        &self.report
    }

    /// Pattern anchors to try, capped by the configured attempt limit.
    ///
    /// A grid too small for the pattern gets a single centred attempt, which
    /// records why placement failed.
    fn anchors(&self) -> Vec<Anchor> {
        if !self.config.decorate {
            return vec![Anchor::Bare];
        }
        let origins = self
            .pattern
            .retry_origins(self.config.width, self.config.height);
        if origins.is_empty() {
            return vec![Anchor::Centre];
        }
        origins
            .into_iter()
            .take(self.config.max_placement_attempts as usize)
            .map(Anchor::At)
            .collect()
    }

    fn run_attempt(&mut self, seed: u64, anchor: Anchor) -> Attempt {
        self.maze.reset();
        let placed = match anchor {
            Anchor::At(origin) => Some(place_pattern_at(&mut self.maze, &self.pattern, origin)),
            Anchor::Centre => Some(place_pattern(&mut self.maze, &self.pattern)),
            Anchor::Bare => None,
        };
        let placement_error = match placed {
            Some(Err(e)) => {
                log::warn!("decorative pattern skipped: {e}");
                Some(e)
            }
            _ => None,
        };

        let mut rng = seeded_rng(seed);
        let carve = carve_all(
            &mut self.maze,
            self.config.algorithm,
            &mut rng,
            self.config.perfect,
            self.config.loop_probability,
        );
        let path = self
            .config
            .path_algorithm
            .find(&self.maze, self.config.entry, self.config.exit);
        let partition = check_connected(&self.maze).err();
        let conflict =
            check_placement(&self.maze, self.config.entry, self.config.exit, path.as_ref())
                .err()
                .or_else(|| partition.clone());
        Attempt {
            placement_error,
            carve,
            path,
            conflict,
            partition,
        }
    }

    /// Use `seed` from now on and regenerate.
    pub fn reseed(&mut self, seed: u64) -> &GenerationReport {
        self.config.seed = Some(seed);
        self.generate()
    }

    /// Switch algorithm and regenerate.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> &GenerationReport {
        self.config.algorithm = algorithm;
        self.generate()
    }

    /// Toggle perfect mode and regenerate.
    pub fn set_perfect(&mut self, perfect: bool) -> &GenerationReport {
        self.config.perfect = perfect;
        self.generate()
    }

    /// Move the endpoints and regenerate.
    ///
    /// Invalid endpoints are rejected before anything changes.
    pub fn set_endpoints(
        &mut self,
        entry: Coord,
        exit: Coord,
    ) -> Result<&GenerationReport, ConfigError> {
        let mut next = self.config.clone();
        next.entry = entry;
        next.exit = exit;
        next.validate()?;
        self.config = next;
        Ok(self.generate())
    }

    /// The current maze.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The current solution path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// The solution as move letters, if a path exists.
    pub fn moves(&self) -> Option<&str> {
        self.moves.as_deref()
    }

    /// The active configuration.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Report for the most recent generation.
    pub fn last_report(&self) -> &GenerationReport {
        &self.report
    }

    /// The export document for the current maze.
    pub fn export(&self) -> Result<String, ExportError> {
        let path = self.path.as_ref().ok_or(ExportError::NoPath)?;
        Ok(encode(&self.maze, self.config.entry, self.config.exit, path))
    }

    /// Write the export document to `file`.
    ///
    /// The maze is left untouched whether or not saving succeeds.
    pub fn save(&self, file: impl AsRef<std::path::Path>) -> Result<(), ExportError> {
        save(
            file,
            &self.maze,
            self.config.entry,
            self.config.exit,
            self.path.as_ref(),
        )
    }
}
