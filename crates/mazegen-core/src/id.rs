//! Grid coordinates and compass directions.

use std::fmt;

/// A cell address on a maze grid.
///
/// `x` grows eastward and `y` grows southward, so `(0, 0)` is the
/// north-west corner. Signed components let callers step off the grid and
/// test the result with `in_bounds` instead of guarding every subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, `0..width`.
    pub x: i32,
    /// Row, `0..height`.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate in `dir`. May lie outside the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// L1 distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction of a unit orthogonal step from `self` to `other`.
    ///
    /// Returns `None` when the two cells are not 4-adjacent.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        Direction::from_step(other.x - self.x, other.y - self.y)
    }
}

/// Renders as `x,y`, the form used by the export format.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four sides of a cell.
///
/// The discriminant order N, E, S, W matches the bit order of
/// [`WallMask`](crate::WallMask).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Toward row `y - 1`.
    North = 0,
    /// Toward column `x + 1`.
    East = 1,
    /// Toward row `y + 1`.
    South = 2,
    /// Toward column `x - 1`.
    West = 3,
}

impl Direction {
    /// All four directions in N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The wall-mask bit for this side: N=1, E=2, S=4, W=8.
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The side facing this one across a shared wall.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the `(dx, dy)` offset for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Move letter used in solution strings.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parse a move letter. Only the uppercase letters are accepted.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Direction for a unit orthogonal delta, `None` for anything else.
    pub fn from_step(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
