//! Grid primitives: compass headings, integer positions and the table rectangle.

use crate::error::BoundsError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Turns 90 degrees counter-clockwise.
    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Turns 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The one-cell displacement of a step taken while facing this way.
    /// North is `+Y`, east is `+X`.
    pub fn unit_vector(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Canonical upper-case name, as used in commands and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the four canonical heading names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts exactly `NORTH`, `EAST`, `SOUTH` or `WEST`. Callers normalize case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

/// An integer grid coordinate. Only meaningful relative to a [`Bounds`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifts by `offset`, or `None` if either axis would overflow `i32`.
    pub fn checked_offset(self, offset: IVec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
        })
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Serialized shape of [`Bounds`]; every field falls back to the default table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
struct RawBounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Default for RawBounds {
    fn default() -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: 5,
            max_y: 5,
        }
    }
}

/// An axis-aligned rectangle of valid cells, inclusive on all four edges.
///
/// Construction rejects inverted rectangles, so `min <= max` holds on both axes for every
/// value of this type, including ones deserialized from a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    min: IVec2,
    max: IVec2,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Result<Self, BoundsError> {
        if min_x > max_x {
            return Err(BoundsError::InvertedX {
                min: min_x,
                max: max_x,
            });
        }
        if min_y > max_y {
            return Err(BoundsError::InvertedY {
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        })
    }

    /// A square table anchored at the origin: `(0,0)..=(size,size)`.
    pub fn square(size: i32) -> Result<Self, BoundsError> {
        Self::new(0, 0, size, size)
    }

    pub fn min(&self) -> Position {
        self.min.into()
    }

    pub fn max(&self) -> Position {
        self.max.into()
    }

    pub fn contains(&self, position: Position) -> bool {
        let p = IVec2::from(position);
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::splat(5),
        }
    }
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_x, raw.min_y, raw.max_x, raw.max_y)
    }
}

impl From<Bounds> for RawBounds {
    fn from(b: Bounds) -> Self {
        Self {
            min_x: b.min.x,
            min_y: b.min.y,
            max_x: b.max.x,
            max_y: b.max.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_left().rotate_right(), d);
            assert_eq!(d.rotate_right().rotate_left(), d);
        }
    }

    #[test]
    fn four_turns_return_home() {
        for d in Direction::ALL {
            let left = (0..4).fold(d, |acc, _| acc.rotate_left());
            let right = (0..4).fold(d, |acc, _| acc.rotate_right());
            assert_eq!(left, d);
            assert_eq!(right, d);
        }
    }

    #[test]
    fn left_cycle_order() {
        assert_eq!(Direction::North.rotate_left(), Direction::West);
        assert_eq!(Direction::West.rotate_left(), Direction::South);
        assert_eq!(Direction::South.rotate_left(), Direction::East);
        assert_eq!(Direction::East.rotate_left(), Direction::North);
    }

    #[test]
    fn unit_vectors() {
        assert_eq!(Direction::North.unit_vector(), IVec2::new(0, 1));
        assert_eq!(Direction::East.unit_vector(), IVec2::new(1, 0));
        assert_eq!(Direction::South.unit_vector(), IVec2::new(0, -1));
        assert_eq!(Direction::West.unit_vector(), IVec2::new(-1, 0));
    }

    #[test]
    fn direction_names_round_trip() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
        assert!("north".parse::<Direction>().is_err());
        assert!("UP".parse::<Direction>().is_err());
    }

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let b = Bounds::new(-2, 1, 3, 4).unwrap();
        for x in -2..=3 {
            for y in 1..=4 {
                assert!(b.contains(Position::new(x, y)), "({x},{y}) should be inside");
            }
        }
        assert!(!b.contains(Position::new(-3, 1)));
        assert!(!b.contains(Position::new(4, 1)));
        assert!(!b.contains(Position::new(0, 0)));
        assert!(!b.contains(Position::new(0, 5)));
        assert!(!b.contains(Position::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn default_bounds_are_zero_to_five() {
        let b = Bounds::default();
        assert_eq!(b.min(), Position::new(0, 0));
        assert_eq!(b.max(), Position::new(5, 5));
        assert_eq!(Bounds::square(5), Ok(b));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            Bounds::new(3, 0, 2, 5),
            Err(BoundsError::InvertedX { min: 3, max: 2 })
        );
        assert_eq!(
            Bounds::new(0, 9, 5, 5),
            Err(BoundsError::InvertedY { min: 9, max: 5 })
        );
        assert!(Bounds::new(1, 1, 1, 1).is_ok());
    }

    #[test]
    fn checked_offset_overflow() {
        let edge = Position::new(i32::MAX, 0);
        assert_eq!(edge.checked_offset(IVec2::X), None);
        assert_eq!(
            edge.checked_offset(IVec2::NEG_X),
            Some(Position::new(i32::MAX - 1, 0))
        );
    }
}
