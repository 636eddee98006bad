use core::fmt::Display;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine_impl::Decline;

/// Number of tiles along each side of the board.
pub const BOARD_SIZE: i8 = 9;
/// Fences every player starts with.
pub const FENCES_PER_PLAYER: u8 = 10;

/// A `(column, row)` pair. Tiles use `0..=8` on both axes, the wall ring
/// around the board uses `-1` and `9`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Coordinate {
    pub column: i8,
    pub row: i8,
}
impl Coordinate {
    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }
    /// Returns the coordinate shifted by `columns` and `rows`.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Coordinate;
    /// assert_eq!(Coordinate::new(4, 0).offset(0, 2), Coordinate::new(4, 2));
    /// assert_eq!(Coordinate::new(0, 0).offset(-1, 0), Coordinate::new(-1, 0));
    /// ```
    pub const fn offset(self, columns: i8, rows: i8) -> Self {
        Self {
            column: self.column + columns,
            row: self.row + rows,
        }
    }
    /// Displacement from `self` to `other`.
    pub const fn delta(self, other: Coordinate) -> (i8, i8) {
        (other.column - self.column, other.row - self.row)
    }
    /// `true` for the 81 playable tiles.
    pub const fn is_on_board(self) -> bool {
        self.column >= 0 && self.column < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }
}
impl From<(i8, i8)> for Coordinate {
    fn from((column, row): (i8, i8)) -> Self {
        Self::new(column, row)
    }
}
impl Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// One of the two sides of the match.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Side {
    /// Starts on row 0 and races to row 8
    First,
    /// Starts on row 8 and races to row 0
    Second,
}
impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
    /// Position of the side in per-player storage.
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
    pub const fn start(self) -> Coordinate {
        match self {
            Side::First => Coordinate::new(4, 0),
            Side::Second => Coordinate::new(4, BOARD_SIZE - 1),
        }
    }
    /// The row the side has to reach.
    pub const fn goal_row(self) -> i8 {
        match self {
            Side::First => BOARD_SIZE - 1,
            Side::Second => 0,
        }
    }
}
/// Side numbers as used by front ends: `1` is [`Side::First`], `2` is [`Side::Second`].
/// # Example
/// ```
/// # use quoridor_utils::base::{Side, UnknownSide};
/// assert_eq!(Side::try_from(2u8), Ok(Side::Second));
/// assert_eq!(Side::try_from(3u8), Err(UnknownSide(3)));
/// ```
impl TryFrom<u8> for Side {
    type Error = UnknownSide;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::First),
            2 => Ok(Side::Second),
            other => Err(UnknownSide(other)),
        }
    }
}
impl Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::First => write!(f, "first player"),
            Side::Second => write!(f, "second player"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, thiserror::Error)]
#[error("unknown side: {0}, expected 1 or 2")]
pub struct UnknownSide(pub u8);

/// Orientation of a fence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Orientation {
    /// Lies along the top edge of its anchor tile, blocks row changes
    Horizontal,
    /// Lies along the left edge of its anchor tile, blocks column changes
    Vertical,
}
impl TryFrom<char> for Orientation {
    type Error = Decline;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'h' => Ok(Orientation::Horizontal),
            'v' => Ok(Orientation::Vertical),
            _ => Err(Decline::InvalidOrientation),
        }
    }
}
/// # Example
/// ```
/// # use quoridor_utils::base::Orientation;
/// # use quoridor_utils::engine_impl::Decline;
/// assert_eq!("H".parse::<Orientation>(), Ok(Orientation::Horizontal));
/// assert_eq!("x".parse::<Orientation>(), Err(Decline::InvalidOrientation));
/// ```
impl FromStr for Orientation {
    type Err = Decline;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Orientation::try_from(c),
            _ => Err(Decline::InvalidOrientation),
        }
    }
}

/// The most recent kind of action a player has taken.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum LastAction {
    #[default]
    None,
    MovedPawn,
    PlacedFence,
}
