//! Line-oriented session that feeds text commands to a [`Rover`].
//!
//! The entry point is [`Interpreter`]. Configure it with a [`RoverConfig`], then call
//! [`Interpreter::run`] with any buffered reader and writer (stdin/stdout in the binary,
//! in-memory buffers in tests).

use crate::command::{Command, Response};
use crate::error::{ConfigError, RoverError};
use crate::model::Bounds;
use crate::parser;
use crate::rover::Rover;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

const BANNER: &str = "Mars Rover Simulator";
const USAGE: &str = "Commands: PLACE X,Y,F | MOVE | LEFT | RIGHT | REPORT | EXIT";
const PROMPT: &str = "> ";
const FAREWELL: &str = "Goodbye!";
const EXIT: &str = "EXIT";

/// Configuration for a rover session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Table the rover lives on. Default: `(0,0)..=(5,5)`.
    pub bounds: Bounds,
    /// Print `> ` before reading each line.
    pub prompt: bool,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            prompt: true,
        }
    }
}

impl RoverConfig {
    /// Reads a TOML config file. Missing keys keep their defaults.
    ///
    /// ```toml
    /// prompt = false
    ///
    /// [bounds]
    /// max_x = 9
    /// max_y = 9
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Interactive command session around a single rover.
pub struct Interpreter {
    rover: Rover,
    config: RoverConfig,
}

impl Interpreter {
    /// Creates a session with an unplaced rover on `config.bounds`.
    pub fn new(config: RoverConfig) -> Self {
        Self {
            rover: Rover::new(config.bounds),
            config,
        }
    }

    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    /// Parses and executes a single non-empty line.
    ///
    /// Returns the text to show the user, if any: the report line for `REPORT`, or the
    /// rejection message for a boundary failure. Successful moves produce `None`.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<String>, RoverError> {
        let command: Command = parser::parse(line)?;
        let text = match command.execute(&mut self.rover)? {
            Response::Report(report) => Some(report),
            Response::Outcome(outcome) => outcome.message().map(|m| format!("Error: {m}")),
        };
        Ok(text)
    }

    /// Runs until `EXIT` or end of input.
    ///
    /// Blank lines are skipped. Parse errors, sequencing errors and boundary rejections are
    /// written as `Error: <message>` and the loop continues. A failing reader ends the
    /// session like end of input; a failing writer is returned to the caller.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        info!(bounds = ?self.config.bounds, "session started");
        writeln!(output, "{BANNER}")?;
        writeln!(output, "{USAGE}")?;
        writeln!(output)?;
        output.flush()?;

        let mut line = String::new();
        loop {
            if self.config.prompt {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(error) => {
                    warn!(%error, "failed to read input, ending session");
                    break;
                }
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case(EXIT) {
                writeln!(output, "{FAREWELL}")?;
                info!("session ended by EXIT");
                return output.flush();
            }

            match self.execute_line(trimmed) {
                Ok(Some(text)) => writeln!(output, "{text}")?,
                Ok(None) => {}
                Err(error) => writeln!(output, "Error: {error}")?,
            }
        }

        info!("session ended at end of input");
        write_farewell(output)
    }
}

/// Closes a session that was cut short (end of input or Ctrl-C) on a fresh line.
pub fn write_farewell(mut output: impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{FAREWELL}")?;
    output.flush()
}
