//! The wall-mask grid and its blocked-cell registry.

use indexmap::IndexSet;
use mazegen_core::{Coord, Direction, WallMask};
use smallvec::SmallVec;

/// Up to four `(direction, neighbour)` pairs around a cell.
pub type Neighbours = SmallVec<[(Direction, Coord); 4]>;

/// A rectangular maze: one [`WallMask`] per cell plus a set of blocked cells.
///
/// Construction yields a fully walled grid with nothing blocked. Walls are
/// only ever removed in pairs by [`carve`](Maze::carve), so the bit on one
/// side of a shared wall always agrees with the bit on the other side.
///
/// Blocked cells are forced fully closed and excluded from carving and
/// traversal. They stay blocked until [`reset`](Maze::reset).
///
/// # Examples
///
/// ```
/// use mazegen_core::{Coord, Direction};
/// use mazegen_grid::Maze;
///
/// let mut maze = Maze::new(3, 2);
/// assert_eq!(maze.cell_count(), 6);
///
/// maze.carve(Coord::new(0, 0), Direction::East);
/// assert!(maze.is_passable(Coord::new(0, 0), Direction::East));
/// assert!(maze.is_passable(Coord::new(1, 0), Direction::West));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    walls: Vec<WallMask>,
    blocked: IndexSet<Coord>,
    pattern_origin: Option<Coord>,
}

impl Maze {
    /// Create a `width * height` grid with every wall present.
    ///
    /// Dimensions are not validated here; the engine's configuration layer
    /// rejects empty grids before one is built. A zero-sized maze is legal
    /// and simply has no cells.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            walls: vec![WallMask::ALL; cells],
            blocked: IndexSet::new(),
            pattern_origin: None,
        }
    }

    /// Rebuild a grid from row-major wall masks (e.g. a decoded export).
    ///
    /// The blocked set starts empty. Returns `None` if `masks.len()` does
    /// not equal `width * height`.
    pub fn from_wall_masks(width: u32, height: u32, masks: Vec<WallMask>) -> Option<Self> {
        if masks.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            walls: masks,
            blocked: IndexSet::new(),
            pattern_origin: None,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, blocked ones included.
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether `coord` lies on the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Whether `coord` is in the blocked-cell registry.
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.blocked.contains(&coord)
    }

    /// In bounds and not blocked: a cell carving and traversal may use.
    pub fn is_open_cell(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_blocked(coord)
    }

    /// Row-major flat index of `coord`, or `None` when out of bounds.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Coordinate for a row-major flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn coord_of(&self, index: usize) -> Coord {
        assert!(
            index < self.walls.len(),
            "cell index {index} out of range for {}x{} maze",
            self.width,
            self.height
        );
        let w = self.width as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// Wall mask of a cell, `None` when out of bounds.
    pub fn wall_mask(&self, coord: Coord) -> Option<WallMask> {
        self.index_of(coord).map(|i| self.walls[i])
    }

    /// All wall masks in row-major order.
    pub fn wall_masks(&self) -> &[WallMask] {
        &self.walls
    }

    /// Wall masks one row at a time, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[WallMask]> + '_ {
        self.walls.chunks(self.width.max(1) as usize)
    }

    /// Whether the wall on side `dir` of `coord` is present.
    ///
    /// Out-of-bounds cells report every wall present.
    pub fn has_wall(&self, coord: Coord, dir: Direction) -> bool {
        self.wall_mask(coord).is_none_or(|m| m.has(dir))
    }

    /// Whether a walker can move from `coord` one step in `dir`.
    ///
    /// Both cells must be open cells and the shared wall must be absent.
    pub fn is_passable(&self, coord: Coord, dir: Direction) -> bool {
        self.is_open_cell(coord)
            && self.is_open_cell(coord.step(dir))
            && !self.has_wall(coord, dir)
    }

    /// Remove the wall between `coord` and its neighbour in `dir`.
    ///
    /// Clears the `dir` bit on `coord` and the opposite bit on the
    /// neighbour in one call, so the two masks never disagree.
    ///
    /// # Panics
    ///
    /// Panics if either cell is out of bounds. Callers check
    /// [`in_bounds`](Self::in_bounds) first; carving off the grid is a bug.
    pub fn carve(&mut self, coord: Coord, dir: Direction) {
        let next = coord.step(dir);
        let (Some(a), Some(b)) = (self.index_of(coord), self.index_of(next)) else {
            panic!("carve {dir} from ({coord}) leaves the {}x{} grid", self.width, self.height);
        };
        debug_assert!(
            !self.is_blocked(coord) && !self.is_blocked(next),
            "carve {dir} from ({coord}) touches a blocked cell"
        );
        self.walls[a].remove(dir);
        self.walls[b].remove(dir.opposite());
    }

    /// Add `coord` to the blocked registry and close all four of its walls.
    ///
    /// Neighbours that had an opening toward `coord` are closed on that
    /// side too. Returns `false` (and changes nothing) when `coord` is out
    /// of bounds.
    pub fn block(&mut self, coord: Coord) -> bool {
        let Some(i) = self.index_of(coord) else {
            return false;
        };
        self.blocked.insert(coord);
        self.walls[i] = WallMask::ALL;
        for dir in Direction::ALL {
            if let Some(n) = self.index_of(coord.step(dir)) {
                self.walls[n].insert(dir.opposite());
            }
        }
        true
    }

    /// The blocked cells, in the order they were registered.
    pub fn blocked_cells(&self) -> &IndexSet<Coord> {
        &self.blocked
    }

    /// Anchor of the placed decorative pattern, if any.
    pub fn pattern_origin(&self) -> Option<Coord> {
        self.pattern_origin
    }

    pub(crate) fn set_pattern_origin(&mut self, origin: Coord) {
        self.pattern_origin = Some(origin);
    }

    /// Restore the constructor state: every wall present, nothing blocked,
    /// no pattern origin.
    pub fn reset(&mut self) {
        self.walls.fill(WallMask::ALL);
        self.blocked.clear();
        self.pattern_origin = None;
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }

    /// Non-blocked coordinates in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|c| !self.is_blocked(*c))
    }

    /// First non-blocked cell in row-major order: the default carving start.
    pub fn first_open_cell(&self) -> Option<Coord> {
        self.open_cells().next()
    }

    /// Number of non-blocked cells.
    pub fn open_cell_count(&self) -> usize {
        self.walls.len() - self.blocked.len()
    }

    /// In-bounds, non-blocked neighbours of `coord`, walls ignored.
    ///
    /// Returned in N, E, S, W order.
    pub fn carvable_neighbours(&self, coord: Coord) -> Neighbours {
        Direction::ALL
            .into_iter()
            .map(|d| (d, coord.step(d)))
            .filter(|&(_, n)| self.is_open_cell(n))
            .collect()
    }

    /// Neighbours reachable from `coord` in one step, in N, E, S, W order.
    pub fn passable_neighbours(&self, coord: Coord) -> Neighbours {
        if !self.is_open_cell(coord) {
            return Neighbours::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_passable(coord, d))
            .map(|d| (d, coord.step(d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_is_fully_walled_and_unblocked() {
        let m = Maze::new(4, 3);
        assert_eq!(m.cell_count(), 12);
        assert!(m.wall_masks().iter().all(|&w| w == WallMask::ALL));
        assert!(m.blocked_cells().is_empty());
        assert_eq!(m.pattern_origin(), None);
        compliance::run_full_compliance(&m);
    }

    #[test]
    fn zero_sized_maze_has_no_cells() {
        let m = Maze::new(0, 5);
        assert_eq!(m.cell_count(), 0);
        assert_eq!(m.first_open_cell(), None);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn from_wall_masks_checks_length() {
        assert!(Maze::from_wall_masks(2, 2, vec![WallMask::ALL; 3]).is_none());
        let m = Maze::from_wall_masks(2, 1, vec![WallMask::ALL; 2]).unwrap();
        assert_eq!(m.width(), 2);
    }

    // ── Bounds and indexing ─────────────────────────────────────

    #[test]
    fn in_bounds_edges() {
        let m = Maze::new(5, 4);
        assert!(m.in_bounds(c(0, 0)));
        assert!(m.in_bounds(c(4, 3)));
        assert!(!m.in_bounds(c(5, 0)));
        assert!(!m.in_bounds(c(0, 4)));
        assert!(!m.in_bounds(c(-1, 0)));
    }

    #[test]
    fn index_round_trip() {
        let m = Maze::new(7, 3);
        for (i, coord) in m.coords().enumerate() {
            assert_eq!(m.index_of(coord), Some(i));
            assert_eq!(m.coord_of(i), coord);
        }
        assert_eq!(m.index_of(c(7, 0)), None);
    }

    // ── Carving ─────────────────────────────────────────────────

    #[test]
    fn carve_clears_both_sides() {
        let mut m = Maze::new(3, 3);
        m.carve(c(1, 1), Direction::North);
        assert!(!m.has_wall(c(1, 1), Direction::North));
        assert!(!m.has_wall(c(1, 0), Direction::South));
        assert_eq!(m.wall_mask(c(1, 1)).unwrap().bits(), 0b1110);
        assert_eq!(m.wall_mask(c(1, 0)).unwrap().bits(), 0b1011);
        compliance::run_full_compliance(&m);
    }

    #[test]
    #[should_panic(expected = "leaves the")]
    fn carve_off_grid_panics() {
        let mut m = Maze::new(2, 2);
        m.carve(c(1, 0), Direction::East);
    }

    #[test]
    fn out_of_bounds_reports_walls() {
        let m = Maze::new(2, 2);
        assert!(m.has_wall(c(-1, 0), Direction::East));
        assert_eq!(m.wall_mask(c(9, 9)), None);
    }

    // ── Blocking ────────────────────────────────────────────────

    #[test]
    fn block_closes_cell_and_neighbour_sides() {
        let mut m = Maze::new(3, 1);
        m.carve(c(0, 0), Direction::East);
        m.carve(c(1, 0), Direction::East);
        assert!(m.block(c(1, 0)));
        assert!(m.is_blocked(c(1, 0)));
        assert_eq!(m.wall_mask(c(1, 0)), Some(WallMask::ALL));
        assert!(m.has_wall(c(0, 0), Direction::East));
        assert!(m.has_wall(c(2, 0), Direction::West));
        assert_eq!(m.open_cell_count(), 2);
        compliance::run_full_compliance(&m);
    }

    #[test]
    fn block_out_of_bounds_is_rejected() {
        let mut m = Maze::new(2, 2);
        assert!(!m.block(c(2, 0)));
        assert!(m.blocked_cells().is_empty());
    }

    #[test]
    fn blocked_cells_are_not_passable_or_carvable() {
        let mut m = Maze::new(3, 3);
        m.block(c(1, 1));
        let n = m.carvable_neighbours(c(1, 0));
        assert!(n.iter().all(|&(_, nb)| nb != c(1, 1)));
        assert!(!m.is_passable(c(1, 0), Direction::South));
        assert_eq!(m.first_open_cell(), Some(c(0, 0)));
    }

    #[test]
    fn first_open_cell_skips_blocked_prefix() {
        let mut m = Maze::new(2, 2);
        m.block(c(0, 0));
        m.block(c(1, 0));
        assert_eq!(m.first_open_cell(), Some(c(0, 1)));
        m.block(c(0, 1));
        m.block(c(1, 1));
        assert_eq!(m.first_open_cell(), None);
    }

    // ── Reset ───────────────────────────────────────────────────

    #[test]
    fn reset_restores_constructor_state() {
        let mut m = Maze::new(4, 4);
        m.carve(c(0, 0), Direction::South);
        m.block(c(3, 3));
        m.set_pattern_origin(c(1, 1));
        m.reset();
        assert_eq!(m, Maze::new(4, 4));
    }

    // ── Neighbourhoods ──────────────────────────────────────────

    #[test]
    fn carvable_neighbours_corner_and_interior() {
        let m = Maze::new(3, 3);
        assert_eq!(m.carvable_neighbours(c(0, 0)).len(), 2);
        assert_eq!(m.carvable_neighbours(c(1, 1)).len(), 4);
        let dirs: Vec<Direction> = m.carvable_neighbours(c(1, 1)).iter().map(|p| p.0).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }

    #[test]
    fn passable_neighbours_follow_carves() {
        let mut m = Maze::new(3, 3);
        assert!(m.passable_neighbours(c(1, 1)).is_empty());
        m.carve(c(1, 1), Direction::West);
        let n = m.passable_neighbours(c(1, 1));
        assert_eq!(n.as_slice(), &[(Direction::West, c(0, 1))]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn random_carves_stay_coherent(
            w in 1u32..8,
            h in 1u32..8,
            ops in proptest::collection::vec((0i32..8, 0i32..8, 0usize..4), 0..40),
        ) {
            let mut m = Maze::new(w, h);
            for (x, y, d) in ops {
                let coord = c(x % w as i32, y % h as i32);
                let dir = Direction::ALL[d];
                if m.in_bounds(coord.step(dir)) {
                    m.carve(coord, dir);
                }
            }
            prop_assert!(crate::analysis::is_wall_coherent(&m));
        }

        #[test]
        fn passable_is_symmetric(
            w in 1u32..6,
            h in 1u32..6,
            ops in proptest::collection::vec((0i32..6, 0i32..6, 0usize..4), 0..30),
        ) {
            let mut m = Maze::new(w, h);
            for (x, y, d) in ops {
                let coord = c(x % w as i32, y % h as i32);
                let dir = Direction::ALL[d];
                if m.in_bounds(coord.step(dir)) {
                    m.carve(coord, dir);
                }
            }
            for coord in m.coords() {
                for (dir, nb) in m.passable_neighbours(coord) {
                    prop_assert!(m.is_passable(nb, dir.opposite()));
                }
            }
        }
    }
}
