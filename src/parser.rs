//! Text to [`Command`] conversion.
//!
//! Input is trimmed and upper-cased before matching, so `place 1,2,north` and
//! `  MOVE ` are both accepted.

use crate::command::Command;
use crate::error::ParseError;

const PLACE_PREFIX: &str = "PLACE";

/// Parses one line of user input.
///
/// Anything beginning with `PLACE` is treated as a placement and must carry exactly three
/// comma-separated arguments: two integers and a heading name.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let normalized = input.trim().to_uppercase();

    if let Some(args) = normalized.strip_prefix(PLACE_PREFIX) {
        return parse_place(args, &normalized);
    }

    match normalized.as_str() {
        "MOVE" => Ok(Command::Move),
        "LEFT" => Ok(Command::Left),
        "RIGHT" => Ok(Command::Right),
        "REPORT" => Ok(Command::Report),
        _ => Err(ParseError::UnknownCommand(input.to_owned())),
    }
}

fn parse_place(args: &str, text: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = args.trim().split(',').map(str::trim).collect();
    let [x, y, direction] = parts[..] else {
        return Err(ParseError::PlaceArity);
    };

    let invalid = || ParseError::InvalidPlace(text.to_owned());
    Ok(Command::Place {
        x: x.parse().map_err(|_| invalid())?,
        y: y.parse().map_err(|_| invalid())?,
        direction: direction.parse().map_err(|_| invalid())?,
    })
}
