//! # rover-sim
//!
//! A single rover on a bounded rectangular table, driven by text commands:
//! `PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT` and `REPORT`.
//!
//! Boundary failures (placing or moving off the table) come back as an [`Outcome`] the caller
//! inspects. Malformed input ([`ParseError`]) and acting before placement ([`NotPlacedError`])
//! are errors.

pub mod command;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod parser;
pub mod rover;

pub use command::*;
pub use error::*;
pub use interpreter::*;
pub use model::*;
pub use parser::parse;
pub use rover::*;
