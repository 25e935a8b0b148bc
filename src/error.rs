use crate::direction::Direction;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a map. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: duplicate city definition '{name}'")]
    DuplicateCity { line: usize, name: String },
    #[error("line {line}: syntax error in road '{token}', expected DIRECTION=CITY")]
    Syntax { line: usize, token: String },
    #[error("line {line}: unknown cardinal direction '{direction}'")]
    UnknownDirection { line: usize, direction: String },
    #[error("line {line}: city '{city}' declares a road to itself")]
    SelfReference { line: usize, city: String },
    #[error("line {line}: city '{city}' has a road to unknown city '{neighbor}'")]
    UnknownCity {
        line: usize,
        city: String,
        neighbor: String,
    },
    #[error(
        "line {line}: road {city} {}={neighbor} conflicts with {neighbor} {}={conflicting}",
        .direction.as_str(),
        .direction.opposite().as_str()
    )]
    InconsistentRoad {
        line: usize,
        city: String,
        direction: Direction,
        neighbor: String,
        conflicting: String,
    },
}

/// Internal consistency faults of the spawner and the movement engine.
/// These point at a bug, never at bad input.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("internal consistency fault: {0}")]
    InvariantViolation(String),
}

/// Application level error
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot load map '{}': {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for the loader
pub type Result<T> = std::result::Result<T, ParseError>;
