//! The decorative "42" shape and its placement.
//!
//! A [`Pattern`] is a set of cells relative to an anchor. Placing it marks
//! those cells blocked on a [`Maze`]. Placement is all-or-nothing: if any
//! cell would fall off the grid, nothing is blocked and the maze keeps no
//! pattern origin.

use crate::maze::Maze;
use indexmap::IndexSet;
use mazegen_core::{Coord, PlacementError};

const GLYPH_FOUR: [(i32, i32); 10] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 4),
    (3, 5),
    (3, 6),
];

const GLYPH_TWO: [(i32, i32); 16] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (3, 0),
    (3, 1),
    (3, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (1, 6),
    (2, 6),
    (3, 6),
];

/// Horizontal offset of the second glyph: glyph width plus a one-cell gap.
const GLYPH_ADVANCE: i32 = 5;

/// A fixed cell shape, stored relative to its top-left anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: IndexSet<Coord>,
    width: u32,
    height: u32,
}

impl Pattern {
    /// Build a pattern from relative cells.
    ///
    /// The bounding box is taken from the cells and must start at
    /// `(0, 0)`; returns `None` for an empty set or negative offsets.
    pub fn from_cells<I: IntoIterator<Item = Coord>>(cells: I) -> Option<Self> {
        let cells: IndexSet<Coord> = cells.into_iter().collect();
        if cells.is_empty() || cells.iter().any(|c| c.x < 0 || c.y < 0) {
            return None;
        }
        let width = cells.iter().map(|c| c.x).max()? as u32 + 1;
        let height = cells.iter().map(|c| c.y).max()? as u32 + 1;
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// The default "4" and "2" glyphs side by side: 9 x 7, 26 cells.
    pub fn forty_two() -> Self {
        let four = GLYPH_FOUR.iter().map(|&(x, y)| Coord::new(x, y));
        let two = GLYPH_TWO
            .iter()
            .map(|&(x, y)| Coord::new(x + GLYPH_ADVANCE, y));
        let cells: IndexSet<Coord> = four.chain(two).collect();
        Self {
            cells,
            width: 9,
            height: 7,
        }
    }

    /// Bounding-box width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bounding-box height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Relative cells in definition order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells in the shape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells.
    ///
    /// [`Pattern::from_cells`] rejects empty sets, so this is `false` for
    /// every constructed pattern.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Anchor that centres the bounding box, using integer division.
    ///
    /// May be negative when the grid is smaller than the pattern.
    pub fn centered_origin(&self, width: u32, height: u32) -> Coord {
        Coord::new(
            width as i32 / 2 - self.width as i32 / 2,
            height as i32 / 2 - self.height as i32 / 2,
        )
    }

    /// Absolute cells for a given anchor.
    pub fn cells_at(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .map(move |c| Coord::new(origin.x + c.x, origin.y + c.y))
    }

    /// Whether every cell lands on a `width x height` grid at `origin`.
    pub fn fits_at(&self, width: u32, height: u32, origin: Coord) -> bool {
        self.cells_at(origin).all(|c| {
            c.x >= 0 && c.y >= 0 && (c.x as u32) < width && (c.y as u32) < height
        })
    }

    /// Anchors to try, in order, when the placed pattern conflicts with
    /// the solution path.
    ///
    /// The centred anchor comes first, then the four corners inset by one
    /// cell. Anchors that do not fit are dropped and duplicates collapse,
    /// so a grid that cannot host the pattern yields an empty list.
    pub fn retry_origins(&self, width: u32, height: u32) -> Vec<Coord> {
        let (w, h) = (width as i32, height as i32);
        let (pw, ph) = (self.width as i32, self.height as i32);
        let candidates = [
            self.centered_origin(width, height),
            Coord::new(1, 1),
            Coord::new(w - pw - 1, 1),
            Coord::new(1, h - ph - 1),
            Coord::new(w - pw - 1, h - ph - 1),
        ];
        let mut out: IndexSet<Coord> = IndexSet::new();
        for origin in candidates {
            if self.fits_at(width, height, origin) {
                out.insert(origin);
            }
        }
        out.into_iter().collect()
    }

    fn does_not_fit(&self, maze: &Maze, origin: Coord) -> PlacementError {
        PlacementError::DoesNotFit {
            pattern_width: self.width,
            pattern_height: self.height,
            grid_width: maze.width(),
            grid_height: maze.height(),
            origin,
        }
    }
}

/// Place `pattern` centred on `maze`.
///
/// On success every pattern cell is blocked and the origin is recorded.
/// On failure the maze is left exactly as it was.
pub fn place_pattern(maze: &mut Maze, pattern: &Pattern) -> Result<Coord, PlacementError> {
    let origin = pattern.centered_origin(maze.width(), maze.height());
    place_pattern_at(maze, pattern, origin)
}

/// Place `pattern` with its top-left corner at `origin`.
pub fn place_pattern_at(
    maze: &mut Maze,
    pattern: &Pattern,
    origin: Coord,
) -> Result<Coord, PlacementError> {
    if !pattern.fits_at(maze.width(), maze.height(), origin) {
        return Err(pattern.does_not_fit(maze, origin));
    }
    for cell in pattern.cells_at(origin) {
        maze.block(cell);
    }
    maze.set_pattern_origin(origin);
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    // ── Shape ───────────────────────────────────────────────────

    #[test]
    fn forty_two_dimensions() {
        let p = Pattern::forty_two();
        assert_eq!((p.width(), p.height()), (9, 7));
        assert_eq!(p.len(), 26);
        assert!(!p.is_empty());
        assert_eq!(Pattern::from_cells(p.cells()), Some(p));
    }

    #[test]
    fn single_cell_pattern_is_not_empty() {
        let p = Pattern::from_cells([Coord::new(0, 0)]).unwrap();
        assert_eq!(p.len(), 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn glyphs_do_not_share_columns() {
        let p = Pattern::forty_two();
        assert!(p.cells().all(|c| c.x != 4));
    }

    #[test]
    fn from_cells_rejects_empty_and_negative() {
        assert!(Pattern::from_cells(Vec::new()).is_none());
        assert!(Pattern::from_cells([Coord::new(-1, 0)]).is_none());
    }

    // ── Placement ───────────────────────────────────────────────

    #[test]
    fn centred_placement_on_20x15() {
        let mut m = Maze::new(20, 15);
        let origin = place_pattern(&mut m, &Pattern::forty_two()).unwrap();
        assert_eq!(origin, Coord::new(6, 4));
        assert_eq!(m.pattern_origin(), Some(origin));
        assert_eq!(m.blocked_cells().len(), 26);
        assert!(m.is_blocked(Coord::new(6, 4)));
        compliance::run_full_compliance(&m);
    }

    #[test]
    fn exact_fit_9x7() {
        let mut m = Maze::new(9, 7);
        assert_eq!(
            place_pattern(&mut m, &Pattern::forty_two()),
            Ok(Coord::new(0, 0))
        );
    }

    #[test]
    fn too_small_grid_is_left_untouched() {
        let mut m = Maze::new(5, 5);
        let before = m.clone();
        let err = place_pattern(&mut m, &Pattern::forty_two()).unwrap_err();
        assert!(matches!(
            err,
            PlacementError::DoesNotFit {
                pattern_width: 9,
                grid_width: 5,
                ..
            }
        ));
        assert!(m.blocked_cells().is_empty());
        assert_eq!(m.pattern_origin(), None);
        assert_eq!(m, before);
    }

    #[test]
    fn explicit_anchor_off_grid_fails() {
        let mut m = Maze::new(12, 10);
        let p = Pattern::forty_two();
        assert!(place_pattern_at(&mut m, &p, Coord::new(4, 0)).is_err());
        assert!(m.blocked_cells().is_empty());
        assert!(place_pattern_at(&mut m, &p, Coord::new(3, 3)).is_ok());
    }

    // ── Retry origins ───────────────────────────────────────────

    #[test]
    fn retry_origins_start_centred_and_fit() {
        let p = Pattern::forty_two();
        let origins = p.retry_origins(25, 20);
        assert_eq!(origins[0], p.centered_origin(25, 20));
        assert_eq!(origins.len(), 5);
        assert!(origins.iter().all(|&o| p.fits_at(25, 20, o)));
    }

    #[test]
    fn retry_origins_collapse_on_tight_grid() {
        let p = Pattern::forty_two();
        assert_eq!(p.retry_origins(9, 7), vec![Coord::new(0, 0)]);
        assert_eq!(p.retry_origins(11, 9), vec![Coord::new(1, 1)]);
        assert!(p.retry_origins(5, 5).is_empty());
    }
}
