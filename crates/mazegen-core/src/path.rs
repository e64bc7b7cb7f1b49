//! Solution paths.

use crate::id::Coord;

/// An ordered walk through a maze, from source to target.
///
/// Produced by the pathfinders. Each element is 4-adjacent to its
/// predecessor with no wall between them; `Path` itself only guarantees
/// that the sequence is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    /// Wrap a cell sequence. Returns `None` for an empty sequence.
    pub fn from_cells(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// First cell (the source).
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell (the target).
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty paths.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves, `len() - 1`.
    pub fn step_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// Whether `coord` lies on the path.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// The cells in walk order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}
