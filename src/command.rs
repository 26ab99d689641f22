//! The closed set of rover commands.

use crate::error::{NotPlacedError, ParseError};
use crate::model::Direction;
use crate::rover::{Outcome, Rover};
use std::fmt;
use std::str::FromStr;

/// A parsed instruction for the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the rover on the table (`PLACE X,Y,F`).
    Place { x: i64, y: i64, direction: Direction },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn counter-clockwise (`LEFT`).
    Left,
    /// Turn clockwise (`RIGHT`).
    Right,
    /// Print the current position and heading (`REPORT`).
    Report,
}

/// What executing a [`Command`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Outcome(Outcome),
    Report(String),
}

impl Command {
    /// Applies the command to `rover`.
    ///
    /// Fails only with [`NotPlacedError`] when a non-PLACE command reaches an unplaced rover.
    pub fn execute(&self, rover: &mut Rover) -> Result<Response, NotPlacedError> {
        let response = match *self {
            Command::Place { x, y, direction } => Response::Outcome(rover.place(x, y, direction)),
            Command::Move => Response::Outcome(rover.move_forward()?),
            Command::Left => Response::Outcome(rover.rotate_left()?),
            Command::Right => Response::Outcome(rover.rotate_right()?),
            Command::Report => Response::Report(rover.report()?),
        };
        Ok(response)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, direction } => write!(f, "PLACE {x},{y},{direction}"),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
