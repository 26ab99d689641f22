//! Error types for the rover simulator.
//!
//! Boundary failures (placing or moving off the table) are *not* represented here; they are
//! ordinary [`Outcome`](crate::rover::Outcome) values. The types below cover malformed input,
//! sequencing violations and invalid configuration.

/// A command line that could not be turned into a [`Command`](crate::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The leading token is not a known command. Carries the raw input.
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("PLACE requires exactly 3 arguments: PLACE X,Y,F")]
    PlaceArity,

    /// A PLACE argument failed to convert. Carries the normalized command text.
    #[error("Invalid PLACE command: {0}")]
    InvalidPlace(String),
}

/// Raised when MOVE, LEFT, RIGHT or REPORT is issued before a successful PLACE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rover must be placed on the table first")]
pub struct NotPlacedError;

/// An inverted table rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("invalid bounds: min_x ({min}) is greater than max_x ({max})")]
    InvertedX { min: i32, max: i32 },

    #[error("invalid bounds: min_y ({min}) is greater than max_y ({max})")]
    InvertedY { min: i32, max: i32 },
}

/// Failure while loading a [`RoverConfig`](crate::interpreter::RoverConfig) from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Anything a single session line can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    NotPlaced(#[from] NotPlacedError),
}
