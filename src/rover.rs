//! Rover state and the operations that drive it.

use crate::error::NotPlacedError;
use crate::model::{Bounds, Direction, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Whether the rover is on the table.
///
/// Position and heading only exist together, so a half-placed rover cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverState {
    #[default]
    Unplaced,
    Placed {
        position: Position,
        direction: Direction,
    },
}

/// Why a boundary check refused a PLACE or MOVE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    PlaceOutOfBounds { x: i64, y: i64 },
    MoveOutOfBounds,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceOutOfBounds { x, y } => write!(
                f,
                "Invalid PLACE command: position ({x},{y}) is outside table bounds"
            ),
            Self::MoveOutOfBounds => {
                f.write_str("Invalid MOVE command: would move rover outside table bounds")
            }
        }
    }
}

/// Result of a state-changing operation.
///
/// A rejection is an expected outcome at the table edge, not an error: the rover is left
/// exactly as it was and the caller decides how to render the message.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Human-readable reason for a rejection; `None` on success.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Applied => None,
            Self::Rejected(r) => Some(r.to_string()),
        }
    }
}

/// A single rover on a fixed rectangular table.
#[derive(Clone, Debug, Default)]
pub struct Rover {
    bounds: Bounds,
    state: RoverState,
}

impl Rover {
    /// Creates an unplaced rover on `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            state: RoverState::Unplaced,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RoverState::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            RoverState::Placed { position, .. } => Some(position),
            RoverState::Unplaced => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            RoverState::Placed { direction, .. } => Some(direction),
            RoverState::Unplaced => None,
        }
    }

    /// Puts the rover at `(x, y)` facing `direction`.
    ///
    /// Allowed from any state. An out-of-bounds target leaves the current state untouched,
    /// including leaving a never-placed rover unplaced. Coordinates that do not fit the grid's
    /// `i32` range are off the table like any other.
    pub fn place(&mut self, x: i64, y: i64, direction: Direction) -> Outcome {
        let position = match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Some(Position::new(x, y)),
            _ => None,
        };
        let Some(position) = position.filter(|p| self.bounds.contains(*p)) else {
            debug!(x, y, "place rejected: outside bounds");
            return Outcome::Rejected(Rejection::PlaceOutOfBounds { x, y });
        };
        self.state = RoverState::Placed {
            position,
            direction,
        };
        debug!(%position, %direction, "placed");
        Outcome::Applied
    }

    /// Advances one cell in the current heading, unless that would leave the table.
    pub fn move_forward(&mut self) -> Result<Outcome, NotPlacedError> {
        let (position, direction) = self.placed()?;
        let target = position
            .checked_offset(direction.unit_vector())
            .filter(|p| self.bounds.contains(*p));

        let Some(target) = target else {
            debug!(%position, %direction, "move rejected: outside bounds");
            return Ok(Outcome::Rejected(Rejection::MoveOutOfBounds));
        };
        self.state = RoverState::Placed {
            position: target,
            direction,
        };
        debug!(from = %position, to = %target, "moved");
        Ok(Outcome::Applied)
    }

    /// Turns 90 degrees counter-clockwise in place.
    pub fn rotate_left(&mut self) -> Result<Outcome, NotPlacedError> {
        self.turn(Direction::rotate_left)
    }

    /// Turns 90 degrees clockwise in place.
    pub fn rotate_right(&mut self) -> Result<Outcome, NotPlacedError> {
        self.turn(Direction::rotate_right)
    }

    /// Renders `X,Y,DIRECTION`, e.g. `0,1,NORTH`.
    pub fn report(&self) -> Result<String, NotPlacedError> {
        let (position, direction) = self.placed()?;
        Ok(format!("{position},{direction}"))
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> Result<Outcome, NotPlacedError> {
        let (position, direction) = self.placed()?;
        let direction = rotate(direction);
        self.state = RoverState::Placed {
            position,
            direction,
        };
        debug!(%direction, "turned");
        Ok(Outcome::Applied)
    }

    fn placed(&self) -> Result<(Position, Direction), NotPlacedError> {
        match self.state {
            RoverState::Placed {
                position,
                direction,
            } => Ok((position, direction)),
            RoverState::Unplaced => Err(NotPlacedError),
        }
    }
}
