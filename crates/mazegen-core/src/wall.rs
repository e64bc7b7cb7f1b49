//! Per-cell wall bitmask.

use crate::id::Direction;
use std::fmt;

/// Four-bit record of which sides of a cell are closed.
///
/// Bit layout follows [`Direction::bit`]: N=1, E=2, S=4, W=8. A set bit
/// means the wall is present. Values above `0xF` are never constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallMask(u8);

impl WallMask {
    /// Every side closed (`0xF`).
    pub const ALL: WallMask = WallMask(0x0F);
    /// Every side open (`0x0`).
    pub const OPEN: WallMask = WallMask(0x00);

    /// Build a mask from raw bits. Returns `None` if any bit above the
    /// low nibble is set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > 0x0F {
            None
        } else {
            Some(WallMask(bits))
        }
    }

    /// The raw 4-bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the wall on `dir` is present.
    pub const fn has(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Close the wall on `dir`.
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Open the wall on `dir`.
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    /// Number of open sides.
    pub const fn open_sides(self) -> u32 {
        4 - self.0.count_ones()
    }

    /// Uppercase hexadecimal digit for this mask.
    pub fn to_hex_digit(self) -> char {
        // The mask never exceeds 0xF, so the digit always exists.
        char::from_digit(u32::from(self.0), 16)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('F')
    }

    /// Parse one hexadecimal digit (either case).
    pub fn from_hex_digit(digit: char) -> Option<Self> {
        digit.to_digit(16).map(|v| WallMask(v as u8))
    }
}

impl fmt::Debug for WallMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallMask({:#x}:", self.0)?;
        for d in Direction::ALL {
            if self.has(d) {
                write!(f, "{}", d.letter())?;
            }
        }
        write!(f, ")")
    }
}
