//! # Alien Invasion
//!
//! Aliens land on a map of cities joined by north/south/east/west roads,
//! wander at random and wipe out every city where two of them meet.
//!
//! This library provides the map loader, the spawning and movement phases of
//! the simulation, the result serializer and a random grid map generator.

pub mod alien;
pub mod cli;
pub mod direction;
pub mod error;
pub mod generator;
pub mod simulation;
pub mod utils;
pub mod world;

pub use alien::Alien;
pub use cli::Args;
pub use direction::Direction;
pub use error::{Error, ParseError, Result, SimulationError};
pub use simulation::{EngineConfig, Outcome, SimulationEngine};
pub use world::World;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Alien, Args, Direction, EngineConfig, Error, Outcome, ParseError, Result,
        SimulationEngine, SimulationError, World,
    };
}
